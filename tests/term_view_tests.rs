//! Render the live engine through the scene feed and check the screen.

use stackfall::core::{Engine, EngineConfig};
use stackfall::term::{encode_frame, AnchorY, GameView, SceneFeed, Screen, Tile, Viewport};
use stackfall::types::{Color, GameCommand};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 24,
};

// (60 - 24) / 2, plus the left border
const BOARD_X: u16 = 19;
const BOARD_Y: u16 = 1;

fn started(seed: u32) -> (Engine, SceneFeed) {
    let mut engine = Engine::new(EngineConfig::default().with_seed(seed)).unwrap();
    let mut feed = SceneFeed::subscribe(&mut engine);
    engine.start_game();
    feed.set_started(true);
    feed.sync();
    (engine, feed)
}

fn render(feed: &SceneFeed) -> Screen {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(feed.scene(), VIEWPORT)
}

#[test]
fn test_active_piece_drawn_two_columns_wide() {
    let (engine, feed) = started(21);
    let screen = render(&feed);

    assert_eq!(screen.get(BOARD_X - 1, 0).unwrap().ch(), '┌');
    assert_eq!(screen.get(BOARD_X + 22, 21).unwrap().ch(), '┘');

    let active = engine.pieces().active().unwrap();
    let block = Tile::Board {
        color: active.color().unwrap(),
        occupied: true,
    };
    for cell in active.cells() {
        let x = BOARD_X + (cell.col_id as u16 - 1) * 2;
        let y = BOARD_Y + cell.row_id as u16 - 1;
        assert_eq!(screen.get(x, y), Some(block), "({}, {})", cell.row_id, cell.col_id);
        assert_eq!(screen.get(x + 1, y), Some(block));
    }
}

#[test]
fn test_move_rewrites_only_changed_rows() {
    let (mut engine, mut feed) = started(21);
    let before = render(&feed);

    engine.apply(GameCommand::MoveDown);
    assert!(feed.sync());
    let after = render(&feed);
    assert_ne!(before.row_text(BOARD_Y), after.row_text(BOARD_Y));

    let mut diff = Vec::new();
    encode_frame(Some(&before), &after, &mut diff).unwrap();
    assert!(!diff.is_empty());

    let mut full = Vec::new();
    encode_frame(None, &after, &mut full).unwrap();
    assert!(diff.len() < full.len());

    let mut unchanged = Vec::new();
    encode_frame(Some(&after), &after, &mut unchanged).unwrap();
    assert!(unchanged.is_empty());
}

#[test]
fn test_game_over_paints_gray_with_banner() {
    let (mut engine, mut feed) = started(4);
    while !engine.is_game_over() {
        engine.apply(GameCommand::MoveDown);
    }
    assert!(feed.sync());
    let screen = render(&feed);

    assert!((0..24).any(|y| screen.row_text(y).contains("GAME OVER")));
    assert_eq!(
        screen.get(BOARD_X, BOARD_Y),
        Some(Tile::Board {
            color: Color::GRAY,
            occupied: false
        })
    );

    engine.apply(GameCommand::Reset);
    feed.sync();
    let screen = render(&feed);
    assert!(!(0..24).any(|y| screen.row_text(y).contains("GAME OVER")));
}
