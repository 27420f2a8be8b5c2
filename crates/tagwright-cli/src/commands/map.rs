use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use tagwright_core::metadata::is_hidden;
use tagwright_core::Metadata;
use tagwright_mapper::{Config, EntityKind, MappedDocument, Mapper};

/// Map one document and print the result.
pub fn run_map(
    config: &Config,
    kind: EntityKind,
    file: Option<PathBuf>,
    json: bool,
    hidden: bool,
) -> Result<()> {
    let input = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read document from stdin")?;
            input
        }
    };

    let mapper = Mapper::new(config.mapping.clone());
    let doc = mapper
        .map_json(kind, &input)
        .with_context(|| format!("Failed to map {} document", kind))?;
    log::info!("Mapped {} into {} tags", kind, doc.metadata.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_document(&doc, hidden);
    }

    Ok(())
}

fn print_document(doc: &MappedDocument, hidden: bool) {
    print_tags(&doc.metadata, hidden);

    if !doc.dj_mix.is_empty() {
        println!("\nDJ-mix:");
        for (medium, artists) in doc.dj_mix.iter() {
            println!("  medium {}: {}", medium, artists.join("; "));
        }
    }

    if !doc.genres.genres.is_empty() {
        println!("\nGenres:");
        for (name, count) in doc.genres.genres.ranked() {
            println!("  {} ({})", name, count);
        }
    }
    for (artist_id, genres) in &doc.genres.artists {
        if genres.is_empty() {
            continue;
        }
        let names: Vec<&str> = genres.ranked().into_iter().map(|(name, _)| name).collect();
        println!("  artist {}: {}", artist_id, names.join(", "));
    }
}

fn print_tags(metadata: &Metadata, hidden: bool) {
    let tags: Vec<(&str, &[String])> = metadata
        .iter()
        .filter(|(key, _)| hidden || !is_hidden(key))
        .collect();
    let width = tags.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);

    for (key, values) in tags {
        println!("{:<width$}  {}", key, values.join("; "), width = width);
    }
}
