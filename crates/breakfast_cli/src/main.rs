//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `breakfast_core` linkage.
//! - Drive one create/get/upsert/delete cycle against an in-memory store.
//! - Keep output deterministic apart from generated IDs.
//!
//! Usage: `breakfast_cli [ABSOLUTE_LOG_DIR]`. File logging is enabled only
//! when a directory is given.

use breakfast_core::{
    default_log_level, init_logging, Breakfast, BreakfastErrors, BreakfastService,
    InMemoryBreakfastRepository, LogConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("breakfast_core ping={}", breakfast_core::ping());
    println!("breakfast_core version={}", breakfast_core::core_version());

    if let Some(log_dir) = std::env::args().nth(1) {
        let configured = LogConfig::new(default_log_level(), &log_dir)
            .and_then(|config| init_logging(&config));
        if let Err(err) = configured {
            eprintln!("logging init failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run_cycle() {
        Ok(()) => ExitCode::SUCCESS,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("error code={} message={}", error.code(), error);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cycle() -> Result<(), BreakfastErrors> {
    let service = BreakfastService::new(InMemoryBreakfastRepository::new());
    let start = breakfast_core::now_epoch_ms();
    let end = start + 60 * 60 * 1000;

    let breakfast = Breakfast::new(
        "Pancakes",
        "Maple syrup stack",
        start,
        end,
        vec!["bacon".to_string()],
        vec!["syrup".to_string()],
    )?;
    let id = breakfast.id;

    service.create(breakfast)?;
    println!("create id={id} status=created");

    let stored = service.get(id)?;
    println!("get id={id} name={}", stored.name);

    let replacement = Breakfast::with_id(
        id,
        "Blueberry pancakes",
        "Maple syrup stack with berries",
        start,
        end,
        vec![],
        vec!["blueberries".to_string()],
    )?;
    let upserted = service.upsert(replacement)?;
    println!("upsert id={id} was_created={}", upserted.was_created);

    service.delete(id)?;
    let gone = service.get(id).is_err();
    println!("delete id={id} gone={gone}");

    log::info!("event=cli_cycle module=cli status=ok id={id}");
    Ok(())
}
