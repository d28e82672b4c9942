use anyhow::{Result, bail};
use clap::Parser;
use furusiya_core::{
    AreaMap, GameConfig, GenerationError, PlacementBounds, Pos, generate_dungeon,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u64,
    #[arg(long, default_value_t = 100)]
    width: usize,
    #[arg(long, default_value_t = 60)]
    height: usize,
    /// Sample entity positions inside the map instead of the width square
    #[arg(long)]
    map_bounds: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = GameConfig::default();
    if args.map_bounds {
        config.dungeon.placement_bounds = PlacementBounds::MapBounds;
    }

    println!(
        "Starting Fuzz harness on seeds {}..{} ({}x{})...",
        args.seed,
        args.seed + args.runs,
        args.width,
        args.height
    );

    let mut exhausted = 0_u64;
    for seed in args.seed..args.seed + args.runs {
        let mut area_map = AreaMap::new(args.width, args.height);
        let mut start: Option<Pos> = None;
        let report = match generate_dungeon(&config, seed, &mut area_map, &mut start) {
            Ok(report) => report,
            Err(GenerationError::RoomPlacementExhausted { placed, target, attempts }) => {
                println!("seed {seed}: gave up at {placed}/{target} rooms after {attempts} attempts");
                exhausted += 1;
                continue;
            }
            Err(e) => bail!("seed {seed}: {e}"),
        };

        // Assert invariants
        assert!(
            area_map.tiles.iter().all(|tile| tile.is_wall() || tile.is_ground()),
            "Invariant failed: tile in undefined state (seed {seed})"
        );
        assert_eq!(
            report.rooms.len() as u32,
            report.target_rooms,
            "Invariant failed: room count (seed {seed})"
        );
        for (index, room) in report.rooms.iter().enumerate() {
            assert!(
                report.rooms[..index].iter().all(|earlier| !room.intersects(earlier)),
                "Invariant failed: overlapping rooms (seed {seed})"
            );
        }
        assert_eq!(
            start,
            Some(report.rooms[0].center()),
            "Invariant failed: player start (seed {seed})"
        );
        let reachable = area_map.reachable_from(report.player_start);
        assert!(
            report.rooms.iter().all(|room| reachable.contains(&room.center())),
            "Invariant failed: disconnected room (seed {seed})"
        );
        for entity in area_map.entities.values() {
            assert!(
                area_map.is_walkable(entity.pos.x, entity.pos.y),
                "Invariant failed: entity inside wall (seed {seed})"
            );
        }
        assert!(report.monsters_placed <= report.monsters_target);
        assert!(report.items_placed <= report.items_target);
    }

    println!("Fuzzing completed successfully ({exhausted} seeds hit the room attempt cap).");
    Ok(())
}
