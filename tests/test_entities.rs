use codex_pong::compute::init_state;
use codex_pong::entities::*;
use codex_pong::geometry::Rect;

#[test]
fn default_config_matches_reference_field() {
    let c = Config::default();
    assert_eq!((c.width, c.height), (600, 400));
    assert_eq!((c.paddle_width, c.paddle_height), (10, 80));
    assert_eq!(c.paddle_speed, 6);
    assert_eq!(c.ball_radius, 8);
    assert_eq!(c.ball_speed, 4);
    assert_eq!(c.paddle_max_y(), 320);
}

#[test]
fn paddle_max_y_never_negative() {
    let c = Config {
        height: 50,
        ..Config::default()
    };
    assert_eq!(c.paddle_max_y(), 0);
}

#[test]
fn paddle_rect_spans_its_size() {
    let p = Paddle {
        side: Side::Right,
        x: 570,
        y: 160,
        width: 10,
        height: 80,
    };
    assert_eq!(p.rect(), Rect::new(570, 160, 580, 240));
}

#[test]
fn ball_boxes() {
    let b = Ball {
        x: 300,
        y: 200,
        radius: 8,
        vx: -4,
        vy: 4,
    };
    assert_eq!(b.rect(), Rect::new(292, 192, 308, 208));
    assert_eq!(b.tentative_rect(), Rect::new(288, 196, 304, 212));
}

#[test]
fn entity_enums_compare() {
    assert_eq!(GameStatus::Title, GameStatus::Title);
    assert_ne!(GameStatus::Title, GameStatus::Play);
    assert_ne!(Side::Left, Side::Right);
    assert_ne!(Command::MoveUp, Command::MoveDown);
    assert_ne!(BallOutcome::Scored, BallOutcome::Lost);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Config::default(), 0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ball.x = 1;
    cloned.score = 999;
    cloned.right_paddle.y = 0;

    assert_eq!(original.ball.x, 300);
    assert_eq!(original.score, 0);
    assert_eq!(original.right_paddle.y, 160);
}
