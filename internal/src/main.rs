// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
enum RunError {
    #[error("usage: single_run <input_file>")]
    Usage,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid instance: {0}")]
    Instance(#[from] model::json_serialisation::LoadError),
    #[error("cannot derive an output file name from {0}")]
    FileName(String),
}

fn main() {
    server::init_logging();

    match single_run() {
        Ok(output_path) => {
            info!("plan written to {}", output_path);
            std::process::exit(0)
        }
        Err(run_error) => {
            error!("{}", run_error);
            std::process::exit(1)
        }
    }
}

fn single_run() -> Result<String, RunError> {
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).ok_or(RunError::Usage)?;

    let mut file = File::open(path)?;
    let mut input_data = String::new();
    file.read_to_string(&mut input_data)?;
    let input_data: serde_json::Value = serde_json::from_str(&input_data)?;
    info!("---------- RUN: {} ----------", path);

    let output = internal::run(input_data)?;

    // output path with sub-directory creation
    let output_dir_name = "output";
    let output_path = ensure_output_path(path, output_dir_name)?;
    let file = File::create(&output_path)?;
    serde_json::to_writer_pretty(file, &output)?;
    Ok(output_path)
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> Result<String, RunError> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| RunError::FileName(input_path.to_string()))?;
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
