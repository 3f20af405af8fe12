use minesweeper as ms;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn create_game(size: u8) -> Result<Vec<u8>, String> {
    console_error_panic_hook::set_once();

    let game = ms::Board::new(size as usize).map_err(|e| e.to_string())?;
    game.to_bytes().map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn validate(bts: Vec<u8>) -> bool {
    console_error_panic_hook::set_once();

    ms::Board::from_bytes(&bts)
        .map(|game| game.check_win())
        .unwrap_or(false)
}

/// Reveals a cell and returns the new state followed by one outcome byte:
/// 0 in progress, 1 won, 2 lost.
#[wasm_bindgen]
pub fn choose_cell(bts: Vec<u8>, id: usize) -> Result<Vec<u8>, String> {
    console_error_panic_hook::set_once();

    let mut game = ms::Board::from_bytes(&bts).map_err(|e| e.to_string())?;
    let res = game.reveal(id).map_err(|e| e.to_string())?;
    let mut xs = game.to_bytes().map_err(|e| e.to_string())?;
    xs.push(match res.outcome {
        ms::GameState::InProgress => 0,
        ms::GameState::Won => 1,
        ms::GameState::Lost => 2,
    });
    Ok(xs)
}

#[wasm_bindgen]
pub fn get_cells(bts: Vec<u8>) -> Result<Vec<i8>, String> {
    console_error_panic_hook::set_once();

    let game = ms::Board::from_bytes(&bts).map_err(|e| e.to_string())?;
    Ok(game
        .cells()
        .iter()
        .map(|cell| match cell.revealed && !cell.is_mine() {
            true => cell.proximity,
            false => -1,
        })
        .collect())
}

#[wasm_bindgen]
pub fn render(bts: Vec<u8>) -> Result<String, String> {
    console_error_panic_hook::set_once();

    let game = ms::Board::from_bytes(&bts).map_err(|e| e.to_string())?;
    Ok(game.render())
}
