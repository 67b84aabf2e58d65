use multiply_four_engine::{Board, GameState, Multiplier, Side};

/// Text rendering of the grid: `[ v]` player marks, `( v)` computer marks,
/// `*` flanking the winning line.
pub fn render_board(board: &Board, state: &GameState) -> String {
    let winning = state.winning_pattern();
    let mut out = String::new();
    for row in board.rows() {
        for &value in row {
            let highlighted = winning.is_some_and(|pattern| pattern.contains(value));
            let cell = if state.marks(Side::Player).contains(&value) {
                format!("[{:>2}]", value)
            } else if state.marks(Side::Computer).contains(&value) {
                format!("({:>2})", value)
            } else {
                format!(" {:>2} ", value)
            };
            if highlighted {
                out.push('*');
                out.push_str(&cell);
                out.push('*');
            } else {
                out.push(' ');
                out.push_str(&cell);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("Player: [x]   Computer: (o)\n");
    out
}

pub fn render_legal_moves(multiplier: Multiplier, moves: &[(u32, u32)]) -> String {
    if moves.is_empty() {
        return format!("No legal moves with multiplier {}.", multiplier);
    }
    let listed: Vec<String> = moves
        .iter()
        .map(|(operand, product)| format!("{} x {} = {}", multiplier, operand, product))
        .collect();
    listed.join("\n")
}
