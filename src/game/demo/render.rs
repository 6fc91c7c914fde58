use crate::game::entities::{Enemy, Player};
use crate::game::types::Tile;

pub fn print_grid(grid: &Vec<Vec<Tile>>, player: &Player, enemies: &Vec<Enemy>) {
    for (row, tiles) in grid.iter().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let mut symbol = match tile {
                Tile::Floor => "· ".to_string(),
                Tile::Wall => "██".to_string(),
                Tile::FloorUnderExplosion => "~~".to_string(),
                Tile::WallUnderExplosion => "▒▒".to_string(),
                Tile::TargetFloor => "()".to_string(),
            };

            // Priorité à l'affichage du joueur puis des ennemis
            if player.pos.row == row && player.pos.col == col && !player.died {
                symbol = "P ".to_string();
            } else if enemies.iter().any(|e| e.pos.row == row && e.pos.col == col) {
                symbol = "E ".to_string();
            }

            print!("{:<3}", symbol);
        }
        println!();
    }
    println!();
}

pub fn print_status(
    enemies_eliminated: usize,
    elapsed_ticks: u32,
    strike_pending: bool,
    ticks_remaining: u8,
) {
    println!("--- t = {}s | {} enemies eliminated ---", elapsed_ticks, enemies_eliminated);
    if strike_pending {
        println!("Airstrike inbound: {} ticks remaining", ticks_remaining);
    }
}
