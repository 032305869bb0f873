mod cli;
mod commands;
mod demo;
mod infra;

use supplier_qualification::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
