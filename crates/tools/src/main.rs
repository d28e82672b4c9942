use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use furusiya_core::{
    AreaMap, GameConfig, PlacementBounds, Pos, config_file::load_config, generate_dungeon,
    snapshot_hash,
};

#[derive(Parser)]
#[command(author, version, about = "Generate a dungeon floor and print it as ASCII", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 100)]
    width: usize,
    #[arg(long, default_value_t = 60)]
    height: usize,
    /// JSON config overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Scatter monsters and items over the whole `0..=width` square
    #[arg(long, conflicts_with = "map_bounds")]
    legacy_bounds: bool,
    /// Keep monster and item draws inside the map
    #[arg(long)]
    map_bounds: bool,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_default_config: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off};
    simplelog::TermLogger::init(
        if verbose { Debug } else { Info },
        simplelog::ConfigBuilder::new().set_target_level(Off).set_location_level(Off).build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

/// Tiles first, then entities bottom-most to top-most so monsters cover items.
fn render_ascii(area_map: &AreaMap, player: Option<Pos>) -> String {
    let mut rows: Vec<Vec<char>> = area_map
        .tiles
        .chunks(area_map.width.max(1))
        .map(|row| row.iter().map(|tile| tile.character).collect())
        .collect();

    let mut stamp = |pos: Pos, glyph: char| {
        if area_map.in_bounds(pos) {
            rows[pos.y as usize][pos.x as usize] = glyph;
        }
    };
    for (_, entity) in area_map.entities_in_draw_order() {
        stamp(entity.pos, entity.glyph);
    }
    if let Some(pos) = player {
        stamp(pos, '@');
    }

    let mut out = String::with_capacity(area_map.tiles.len() + area_map.height);
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.legacy_bounds {
        config.dungeon.placement_bounds = PlacementBounds::WidthSquare;
    }
    if args.map_bounds {
        config.dungeon.placement_bounds = PlacementBounds::MapBounds;
    }

    if args.print_default_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!("generating {}x{} dungeon with seed {}", args.width, args.height, args.seed);
    let mut area_map = AreaMap::new(args.width, args.height);
    let mut player: Option<Pos> = None;
    let report = generate_dungeon(&config, args.seed, &mut area_map, &mut player)
        .with_context(|| format!("Dungeon generation failed for seed {}", args.seed))?;

    print!("{}", render_ascii(&area_map, player));
    println!();
    println!(
        "Rooms: {}/{} after {} attempts, {} tunnels",
        report.rooms.len(),
        report.target_rooms,
        report.room_attempts,
        report.tunnels
    );
    println!("Player start: ({}, {})", report.player_start.x, report.player_start.y);
    println!("Monsters: {}/{}", report.monsters_placed, report.monsters_target);
    println!("Items: {}/{}", report.items_placed, report.items_target);
    println!("Snapshot Hash: 0x{:016x}", snapshot_hash(&area_map));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use furusiya_core::content::{BUSHSLIME, HEALING_POTION, default_enemy_data, keys};
    use furusiya_core::mapgen::factories::{create_item, create_monster};

    #[test]
    fn render_draws_monsters_over_items_and_player_on_top() {
        let mut area_map = AreaMap::new(4, 2);
        let pos = Pos { y: 1, x: 2 };
        let data = default_enemy_data(keys::SPECIES_BUSHSLIME).expect("bushslime stats");
        area_map.add_entity(create_monster(data, pos, BUSHSLIME.colour, BUSHSLIME.name));
        let potion = area_map.add_entity(create_item(
            pos,
            HEALING_POTION.glyph,
            HEALING_POTION.name,
            HEALING_POTION.colour,
            HEALING_POTION.use_effect,
        ));
        area_map.send_to_back(potion);

        assert_eq!(render_ascii(&area_map, None), "....\n..b.\n");
        assert_eq!(render_ascii(&area_map, Some(Pos { y: 0, x: 0 })), "@...\n..b.\n");
    }

    #[test]
    fn bounds_flags_conflict() {
        assert!(Args::try_parse_from(["dungeon", "--legacy-bounds", "--map-bounds"]).is_err());
        let args = Args::try_parse_from(["dungeon", "--seed", "7", "--width", "80"])
            .expect("args should parse");
        assert_eq!(args.seed, 7);
        assert_eq!(args.width, 80);
        assert_eq!(args.height, 60);
    }
}
