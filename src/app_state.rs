use crate::config::Config;
use crate::external::External;

pub struct AppState {
    pub config: Config,
    pub ext: External,
}
