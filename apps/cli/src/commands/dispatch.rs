use crate::commands::analyze::{analyze_dir, AnalyzeDirArgs, ANALYZE_DIR};

/// 按命令名分发，参数为 JSON 对象字符串
pub async fn dispatch(command: &str, args_json: &str) -> Result<String, String> {
    match command {
        ANALYZE_DIR => {
            let args: AnalyzeDirArgs = serde_json::from_str(args_json)
                .map_err(|e| format!("invalid arguments for {}: {}", command, e))?;
            analyze_dir(args.name, args.limit).await
        }
        other => Err(format!("unknown command: {}", other)),
    }
}
