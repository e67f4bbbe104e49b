use dnasim_core::storage::NewPreset;
use dnasim_core::DnaSimError;

use crate::app::AppContext;
use crate::cli::{PresetCommands, PresetCreateArgs, PresetDeleteArgs, PresetListArgs, PresetShowArgs};
use crate::commands::codec::parse_mapping;
use crate::output::{preset_line, print_preset};

pub fn handle_presets(ctx: &AppContext, command: &PresetCommands) -> anyhow::Result<()> {
    match command {
        PresetCommands::List(args) => handle_list(ctx, args),
        PresetCommands::Show(args) => handle_show(ctx, args),
        PresetCommands::Create(args) => handle_create(ctx, args),
        PresetCommands::Delete(args) => handle_delete(ctx, args),
    }
}

fn handle_list(ctx: &AppContext, args: &PresetListArgs) -> anyhow::Result<()> {
    let store = ctx.open_durable_store()?;
    let presets = store.list_presets()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
    } else if presets.is_empty() {
        if !ctx.quiet() {
            println!("No saved presets yet.");
        }
    } else {
        for preset in &presets {
            println!("{}", preset_line(preset));
        }
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, args: &PresetShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_durable_store()?;
    let preset = store
        .get_preset(args.id)?
        .ok_or_else(|| DnaSimError::NotFound(format!("Preset {} not found", args.id)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preset)?);
    } else {
        print_preset(&preset, ctx.quiet());
    }
    Ok(())
}

fn handle_create(ctx: &AppContext, args: &PresetCreateArgs) -> anyhow::Result<()> {
    let mapping = parse_mapping(args.mapping.as_deref())?;
    let input = NewPreset::new(args.name.as_str(), args.text.as_str(), &mapping);

    let store = ctx.open_durable_store()?;
    let preset = store.create_preset(&input)?;
    tracing::debug!(id = preset.id, "saved preset");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preset)?);
    } else if ctx.quiet() {
        println!("{}", preset.id);
    } else {
        println!("Saved preset \"{}\" with id {}", preset.name, preset.id);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &PresetDeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_durable_store()?;
    if !store.delete_preset(args.id)? {
        return Err(DnaSimError::NotFound(format!("Preset {} not found", args.id)).into());
    }

    if !ctx.quiet() {
        println!("Deleted preset {}", args.id);
    }
    Ok(())
}
