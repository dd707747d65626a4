use crate::canvas::{Anchor, Canvas, Color, BLACK, GRAY, RED, WHITE, YELLOW};
use crate::config::GameConfig;
use crate::game::State;
use crate::leaderboard::Leaderboard;
use crate::session::GameSession;

const SCORE_POS: Anchor = Anchor::TopLeft { x: 10, y: 10 };

/// Draws one full frame for `state`.
pub fn draw<C: Canvas>(canvas: &mut C, state: &State, config: &GameConfig) -> crossterm::Result<()> {
    canvas.clear(BLACK)?;

    match state {
        State::Intro => intro(canvas, config)?,
        State::Playing(session) => playing(canvas, session, config)?,
        State::GameOver { prompt: Some(prompt), .. } => {
            message(canvas, config, "Enter Your Name", WHITE, -50)?;
            message(canvas, config, prompt.text(), YELLOW, 0)?;
        }
        State::GameOver { score, prompt: None } => {
            message(canvas, config, "You Lost!", RED, -50)?;
            message(canvas, config, "Press C-Play Again or Q-Quit", WHITE, 0)?;
            canvas.draw_text(&format!("Score: {}", score), WHITE, SCORE_POS)?;
        }
        State::Leaderboard(board) => leaderboard(canvas, board, config)?,
        State::Terminated => {}
    }

    canvas.present()
}

fn intro<C: Canvas>(canvas: &mut C, config: &GameConfig) -> crossterm::Result<()> {
    canvas.draw_text("Snake Game", WHITE, Anchor::CentredAt { y: config.height / 4 })?;
    message(canvas, config, "Press SPACE to Play", WHITE, 100)?;
    message(canvas, config, "Press L for Leaderboard", WHITE, 150)?;
    message(canvas, config, "Press Q to Quit", WHITE, 200)
}

fn playing<C: Canvas>(canvas: &mut C, session: &GameSession, config: &GameConfig) -> crossterm::Result<()> {
    let block = config.block;
    walls(canvas, config)?;

    let food = session.food();
    canvas.draw_rect(food.x, food.y, block, block, RED)?;

    for (i, segment) in session.snake().body().iter().enumerate() {
        canvas.draw_rect(segment.x, segment.y, block, block, segment_color(i))?;
    }

    canvas.draw_text(&format!("Score: {}", session.score()), WHITE, SCORE_POS)
}

/// Frame one block thick just outside the playfield. Touching it ends the game.
fn walls<C: Canvas>(canvas: &mut C, config: &GameConfig) -> crossterm::Result<()> {
    let block = config.block;
    let (cols, rows) = config.grid_size();
    let (right, bottom) = (cols * block, rows * block);

    canvas.draw_rect(-block, -block, right + 2 * block, block, GRAY)?;
    canvas.draw_rect(-block, bottom, right + 2 * block, block, GRAY)?;
    canvas.draw_rect(-block, 0, block, bottom, GRAY)?;
    canvas.draw_rect(right, 0, block, bottom, GRAY)
}

fn leaderboard<C: Canvas>(canvas: &mut C, board: &Leaderboard, config: &GameConfig) -> crossterm::Result<()> {
    canvas.draw_text("Leaderboard", WHITE, Anchor::CentredAt { y: 50 })?;

    for (i, entry) in board.iter().enumerate() {
        let rank = i as i32 + 1;
        let line = format!("{}. {} - {} (Date: {})", rank, entry.name, entry.score, entry.date);
        canvas.draw_text(&line, WHITE, Anchor::CentredAt { y: 150 + rank * 30 })?;
    }

    canvas.draw_text("Press SPACE to go back", WHITE, Anchor::CentredAt { y: config.height - 50 })
}

/// Centred line, `offset` pixels below the middle of the playfield.
fn message<C: Canvas>(
    canvas: &mut C,
    config: &GameConfig,
    text: &str,
    color: Color,
    offset: i32,
) -> crossterm::Result<()> {
    canvas.draw_text(text, color, Anchor::CentredAt { y: config.height / 2 + offset })
}

/// Segments brighten from tail to head.
fn segment_color(index: usize) -> Color {
    let g = (100 + index * 5).min(255) as u8;
    Color::rgb(0, g, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCall, RecordingCanvas};
    use crate::leaderboard::LeaderboardEntry;
    use crate::name_prompt::NamePrompt;
    use crate::snake::Position;
    use rand::{rngs::StdRng, SeedableRng};

    fn render(state: &State) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, state, &GameConfig::default()).unwrap();
        canvas
    }

    #[test]
    fn test_frame_is_cleared_and_presented() {
        let canvas = render(&State::Intro);
        assert_eq!(canvas.calls.first(), Some(&DrawCall::Clear(BLACK)));
        assert_eq!(canvas.calls.last(), Some(&DrawCall::Present));
    }

    #[test]
    fn test_intro() {
        let canvas = render(&State::Intro);
        assert_eq!(
            canvas.texts(),
            vec!["Snake Game", "Press SPACE to Play", "Press L for Leaderboard", "Press Q to Quit"]
        );
    }

    #[test]
    fn test_playing_draws_food_snake_and_score() {
        let mut session = GameSession::new(GameConfig::default(), StdRng::seed_from_u64(1));
        session.place_food(Position::new(45, 60));

        let canvas = render(&State::Playing(session));
        let rects = canvas.rects();

        assert_eq!(rects.len(), 6);
        assert_eq!(rects[4], (45, 60, RED));
        assert_eq!(rects[5], (390, 300, Color::rgb(0, 100, 0)));
        assert_eq!(canvas.texts(), vec!["Score: 0"]);
    }

    #[test]
    fn test_walls_enclose_last_in_bounds_block() {
        let mut canvas = RecordingCanvas::default();
        walls(&mut canvas, &GameConfig::default()).unwrap();

        // The right wall starts right after the block at x = 795
        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Rect { x: -15, y: -15, w: 840, h: 15, color: GRAY },
                DrawCall::Rect { x: -15, y: 600, w: 840, h: 15, color: GRAY },
                DrawCall::Rect { x: -15, y: 0, w: 15, h: 600, color: GRAY },
                DrawCall::Rect { x: 810, y: 0, w: 15, h: 600, color: GRAY },
            ]
        );
    }

    #[test]
    fn test_segment_colors_saturate() {
        assert_eq!(segment_color(0), Color::rgb(0, 100, 0));
        assert_eq!(segment_color(10), Color::rgb(0, 150, 0));
        assert_eq!(segment_color(100), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_name_entry() {
        let mut prompt = NamePrompt::new();
        prompt.push('j');
        prompt.push('o');

        let canvas = render(&State::GameOver { score: 4, prompt: Some(prompt) });
        assert_eq!(canvas.texts(), vec!["Enter Your Name", "jo"]);
    }

    #[test]
    fn test_game_over() {
        let canvas = render(&State::GameOver { score: 4, prompt: None });
        assert_eq!(
            canvas.texts(),
            vec!["You Lost!", "Press C-Play Again or Q-Quit", "Score: 4"]
        );
    }

    #[test]
    fn test_leaderboard_rows() {
        let board = vec![
            LeaderboardEntry { name: "amy".into(), score: 9, date: "2024-05-01 10:00:00".into() },
            LeaderboardEntry { name: "bo".into(), score: 2, date: "2024-05-02 11:30:00".into() },
        ];

        let canvas = render(&State::Leaderboard(board));
        assert_eq!(
            canvas.texts(),
            vec![
                "Leaderboard",
                "1. amy - 9 (Date: 2024-05-01 10:00:00)",
                "2. bo - 2 (Date: 2024-05-02 11:30:00)",
                "Press SPACE to go back",
            ]
        );
    }
}
