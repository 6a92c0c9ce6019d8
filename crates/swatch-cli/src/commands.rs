//! Command implementations.
//!
//! Each command writes its results to stdout and returns how many inputs it
//! had to skip. Skipped inputs are reported on stderr as they happen.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use swatch_codec::{
    decode_catalog, decode_name, encode_name, export_file_name, export_json, export_names_json,
    import_json, migrate_legacy_name, parse_color_value, should_use_black_text_for_value,
    sort_natural_codes, uno_theme_snippet, Catalog, ColorNameRecord,
};
use swatch_common::{ContrastMode, InterchangeError, ParseFailure, SwatchError};
use swatch_config::SwatchConfig;

use crate::cli::Command;
use crate::clipboard::Clipboard;
use crate::input::items_or_stdin;

pub fn run(command: Command, config: &SwatchConfig) -> Result<usize, SwatchError> {
    let mut out = io::stdout().lock();
    let abbreviated = |long_keys: bool| config.codec.abbreviated_keys && !long_keys;

    match command {
        Command::Decode { names } => decode(&mut out, items_or_stdin(names)?),
        Command::Encode { records, long_keys } => {
            encode(&mut out, items_or_stdin(records)?, abbreviated(long_keys))
        }
        Command::ParseColor { values } => parse_colors(&mut out, items_or_stdin(values)?),
        Command::Contrast {
            values,
            mode,
            position,
        } => {
            let mode = mode.unwrap_or(config.contrast.mode);
            let position = position.unwrap_or(config.contrast.position);
            contrast(&mut out, items_or_stdin(values)?, mode, position)
        }
        Command::Sort { lines } => {
            let mut lines = items_or_stdin(lines)?;
            sort_natural_codes(&mut lines);
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            Ok(0)
        }
        Command::Export {
            names,
            unsorted,
            out_dir,
        } => {
            let catalog = decode_catalog(items_or_stdin(names)?);
            let json = export_json(&catalog, config.export.sort_natural && !unsorted)?;
            match out_dir {
                Some(dir) => {
                    let path = write_export(&dir, &config.export.file_prefix, &json)?;
                    writeln!(out, "{}", path.display())?;
                }
                None => writeln!(out, "{json}")?,
            }
            Ok(catalog.skipped().len())
        }
        Command::ExportNames { names, long_keys } => {
            let catalog = decode_catalog(items_or_stdin(names)?);
            writeln!(
                out,
                "{}",
                export_names_json(&catalog, abbreviated(long_keys))?
            )?;
            Ok(catalog.skipped().len())
        }
        Command::Import { file, long_keys } => {
            let text = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    io::stdin().lock().read_to_string(&mut text)?;
                    text
                }
            };
            let catalog = import_json(&text)?;
            print_names(&mut out, &catalog, abbreviated(long_keys))?;
            Ok(catalog.skipped().len())
        }
        Command::Migrate {
            names,
            stops,
            long_keys,
        } => {
            let names = items_or_stdin(names)?;
            let mut skipped = 0;
            for (index, name) in names.iter().enumerate() {
                match migrate_legacy_name(name, stops.as_deref(), &config.migration) {
                    Ok(record) => {
                        writeln!(out, "{}", encode_name(&record, abbreviated(long_keys)))?
                    }
                    Err(failure) => {
                        report(index, &failure);
                        skipped += 1;
                    }
                }
            }
            Ok(skipped)
        }
        Command::Snippet { names, copy } => {
            let catalog = decode_catalog(items_or_stdin(names)?);
            let snippet = uno_theme_snippet(&catalog)
                .ok_or_else(|| SwatchError::Other("no colors to put in a snippet".into()))?;
            if copy {
                Clipboard::new()?.set_text(&snippet)?;
                tracing::info!(colors = catalog.len(), "snippet copied to clipboard");
            }
            writeln!(out, "{snippet}")?;
            Ok(catalog.skipped().len())
        }
    }
}

fn decode(out: &mut impl Write, names: Vec<String>) -> Result<usize, SwatchError> {
    let mut skipped = 0;
    for (index, name) in names.iter().enumerate() {
        match decode_name(name) {
            Ok(record) => writeln!(out, "{}", to_json(&record)?)?,
            Err(failure) => {
                report(index, &failure);
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

fn encode(
    out: &mut impl Write,
    records: Vec<String>,
    abbreviated: bool,
) -> Result<usize, SwatchError> {
    let mut skipped = 0;
    for (index, line) in records.iter().enumerate() {
        match serde_json::from_str::<ColorNameRecord>(line) {
            Ok(record) => writeln!(out, "{}", encode_name(&record, abbreviated))?,
            Err(e) => {
                eprintln!("{index}: invalid record: {e}");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

fn parse_colors(out: &mut impl Write, values: Vec<String>) -> Result<usize, SwatchError> {
    let mut skipped = 0;
    for (index, value) in values.iter().enumerate() {
        match parse_color_value(value) {
            Ok(parsed) => {
                let kind = if parsed.is_gradient() { "gradient" } else { "solid" };
                writeln!(out, "{kind}\t{parsed}")?;
            }
            Err(failure) => {
                report(index, &failure);
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

fn contrast(
    out: &mut impl Write,
    values: Vec<String>,
    mode: ContrastMode,
    position: f64,
) -> Result<usize, SwatchError> {
    let mut skipped = 0;
    for (index, value) in values.iter().enumerate() {
        match parse_color_value(value) {
            Ok(parsed) => {
                let black = should_use_black_text_for_value(&parsed, mode, Some(position));
                writeln!(out, "{value}\t{}", if black { "black" } else { "white" })?;
            }
            Err(failure) => {
                report(index, &failure);
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

fn print_names(out: &mut impl Write, catalog: &Catalog, abbreviated: bool) -> io::Result<()> {
    for asset in catalog.assets() {
        writeln!(out, "{}", asset.encoded_name(abbreviated))?;
    }
    Ok(())
}

fn write_export(dir: &Path, prefix: &str, json: &str) -> Result<PathBuf, SwatchError> {
    let path = dir.join(export_file_name(prefix, chrono::Local::now().date_naive()));
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), "wrote color export");
    Ok(path)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SwatchError> {
    serde_json::to_string(value).map_err(|e| InterchangeError::from(e).into())
}

fn report(index: usize, failure: &ParseFailure) {
    eprintln!("{index}: {}: {failure}", failure.reason());
}
