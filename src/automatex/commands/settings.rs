use crate::commands::helpers::admin_session;
use crate::commands::{CmdMessage, CmdResult, MarketPaths};
use crate::config::MarketConfig;
use crate::error::Result;
use crate::store::StateStore;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run<S: StateStore>(
    store: &S,
    paths: &MarketPaths,
    action: ConfigAction,
) -> Result<CmdResult> {
    admin_session(store)?;
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = MarketConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = MarketConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = MarketConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            info!(key = %key, "settings updated");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
