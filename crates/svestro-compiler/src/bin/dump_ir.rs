//! Debug script to see what the IR looks like for a config file.

use std::path::PathBuf;
use svestro_compiler::{Compiler, CompilerConfig};

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| CompilerConfig::default().config_path);

    let compiler = Compiler::new(CompilerConfig {
        config_path,
        ..CompilerConfig::default()
    });

    match compiler.load_ir() {
        Ok(ir) => match serde_json::to_string_pretty(&ir) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Error: {:?}", e),
        },
        Err(e) => {
            println!("Error: {:?}", e);
        }
    }
}
