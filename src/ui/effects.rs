//! Celebratory terminal confetti.

use colored::*;
use rand::Rng;

const GLYPHS: &[char] = &['*', '+', '.', 'o', '°', '•'];

const WIDTH: usize = 58;
const ROWS: usize = 5;

/// Fires two confetti bursts, one from each side of the terminal.
///
/// The left burst is densest near the left margin, the right burst near
/// the right margin, fading towards the middle.
pub fn confetti_burst() {
    let mut rng = rand::rng();

    println!();
    for row in 0..ROWS {
        let mut line = String::with_capacity(WIDTH);
        for col in 0..WIDTH {
            // Density falls off with distance from the nearest edge and
            // with each row, so the burst tapers out.
            let edge_distance = col.min(WIDTH - 1 - col);
            let density = 32 + edge_distance * 3 + row * 6;

            if rng.random_range(0..density) < 10 {
                line.push(GLYPHS[rng.random_range(0..GLYPHS.len())]);
            } else {
                line.push(' ');
            }
        }
        println!("{}", colorize_line(&line, &mut rng));
    }
    println!();
}

/// Colors each glyph of a burst line at random.
fn colorize_line(line: &str, rng: &mut impl Rng) -> String {
    line.chars()
        .map(|c| {
            if c == ' ' {
                " ".to_string()
            } else {
                let colored = match rng.random_range(0..5) {
                    0 => c.to_string().bright_yellow(),
                    1 => c.to_string().bright_magenta(),
                    2 => c.to_string().bright_cyan(),
                    3 => c.to_string().bright_green(),
                    _ => c.to_string().bright_red(),
                };
                colored.to_string()
            }
        })
        .collect()
}
