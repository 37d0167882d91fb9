//! Plan on a character map fixture and print the result.
//!
//! With `--goal-x/--goal-y` a route is planned from the robot to the goal.
//! Without them the next exploration goal is chosen and a route to it is
//! planned. The grid is printed with the cell roles overlaid.
//!
//! Usage:
//!   cargo run --example explore_map -- --map examples/maps/partial_office.yaml
//!   cargo run --example explore_map -- --map examples/maps/partial_office.yaml --goal-x 0.3 --goal-y 0.0

use std::path::Path;

use clap::Parser;
use serde::Deserialize;

use marga::{
    CellRole, GridCoord, MapSnapshot, MargaConfig, Navigator, Pose2D, Route, WorldPoint,
};

/// Route planning and exploration on a map fixture
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    /// Map fixture (YAML with resolution, origin and character rows)
    #[arg(short, long, default_value = "examples/maps/partial_office.yaml")]
    map: String,

    /// Goal X in meters; explores when omitted
    #[arg(long, requires = "goal_y")]
    goal_x: Option<f32>,

    /// Goal Y in meters
    #[arg(long, requires = "goal_x")]
    goal_y: Option<f32>,
}

/// On-disk map fixture.
#[derive(Debug, Deserialize)]
struct MapFixture {
    resolution: f32,
    #[serde(default)]
    origin_x: f32,
    #[serde(default)]
    origin_y: f32,
    /// Robot position in meters
    robot: [f32; 2],
    /// Rows from y = 0 upward
    rows: Vec<String>,
}

fn load_fixture(path: &Path) -> Result<MapFixture, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_yaml::from_str(&contents).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match MargaConfig::load(Path::new(&args.config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}, using defaults", e);
            MargaConfig::default()
        }
    };

    let fixture = match load_fixture(Path::new(&args.map)) {
        Ok(fixture) => fixture,
        Err(e) => {
            eprintln!("Failed to load map {}: {}", args.map, e);
            std::process::exit(1);
        }
    };

    let origin = WorldPoint::new(fixture.origin_x, fixture.origin_y);
    let snapshot = MapSnapshot::from_rows(
        &fixture.rows,
        fixture.resolution,
        origin,
        &config.occupancy_config(),
    );
    println!(
        "Loaded map: {}x{} @ {:.2}m/cell",
        snapshot.width, snapshot.height, snapshot.resolution
    );

    let mut nav = Navigator::new(&config);
    if let Err(e) = nav.update_map(snapshot) {
        eprintln!("Rejected map: {}", e);
        std::process::exit(1);
    }

    let robot = Pose2D::new(fixture.robot[0], fixture.robot[1], 0.0);
    let goal = match (args.goal_x, args.goal_y) {
        (Some(x), Some(y)) => Pose2D::new(x, y, 0.0),
        _ => match nav.next_exploration_goal(robot) {
            Ok(goal) => {
                println!(
                    "Exploration goal: ({:.2}, {:.2}) cell ({},{}), cluster of {}, weight {:.2}",
                    goal.world.x,
                    goal.world.y,
                    goal.cell.x,
                    goal.cell.y,
                    goal.cluster_size,
                    goal.weight
                );
                // Planning clears the frontier overlays, show them first
                render(&nav);
                Pose2D::new(goal.world.x, goal.world.y, 0.0)
            }
            Err(e) => {
                println!("Nothing to explore: {}", e);
                render(&nav);
                return;
            }
        },
    };

    match nav.plan_route(robot, goal) {
        Ok(route) => print_route(&route),
        Err(e) => println!("Planning failed: [{}] {}", e.code(), e),
    }
    render(&nav);
}

fn print_route(route: &Route) {
    println!(
        "\nRoute: {} cells, {} expansions, {} waypoints",
        route.cells.len(),
        route.nodes_expanded,
        route.waypoints.len()
    );
    for (i, wp) in route.waypoints.iter().enumerate() {
        println!(
            "  {:>2}: ({:>6.2}, {:>6.2}) heading {:>6.1}°",
            i,
            wp.position.x,
            wp.position.y,
            wp.heading.to_degrees()
        );
    }
}

/// Print the grid top row first, later roles drawn over earlier ones.
fn render(nav: &Navigator) {
    let Some(grid) = nav.grid() else {
        return;
    };
    let width = grid.width();
    let height = grid.height();
    let mut canvas: Vec<Vec<char>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| grid.get_type(GridCoord::new(x as i32, y as i32)).as_char())
                .collect()
        })
        .collect();

    let overlays = [
        (CellRole::Expanded, ':'),
        (CellRole::Frontier, 'F'),
        (CellRole::Path, '*'),
        (CellRole::Centroid, 'C'),
        (CellRole::Goal, 'G'),
    ];
    for (role, symbol) in overlays {
        for cell in nav.cells(role) {
            if grid.is_valid_coord(*cell) {
                canvas[cell.y as usize][cell.x as usize] = symbol;
            }
        }
    }

    println!();
    for row in canvas.iter().rev() {
        println!("  {}", row.iter().collect::<String>());
    }
}
