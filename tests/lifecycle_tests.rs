//! Integration tests for the event contract of the simulation core

use lumines::core::{Event, Game, GameSnapshot, Grid};
use lumines::types::{Color, DetachedBlock, GamePhase, Piece, ScannedBlock};

fn heads(n: usize, tails: usize) -> Vec<ScannedBlock> {
    (0..n + tails)
        .map(|i| ScannedBlock {
            x: (i % 16) as u8,
            y: 9,
            color: Color::Light,
            head: i < n,
        })
        .collect()
}

fn restarted(seed: u32) -> Game {
    let mut game = Game::with_seed(seed);
    game.dispatch(&Event::Restart);
    game
}

#[test]
fn test_restart_gives_clean_game() {
    let mut game = restarted(12345);
    let mut grid = Grid::new();
    grid.set(4, 9, Some(Color::Dark));
    game.dispatch(&Event::UpdateGrid { grid });
    game.dispatch(&Event::Scan {
        scanned: heads(2, 0),
        end: false,
    });
    game.dispatch(&Event::GameOver);

    game.dispatch(&Event::Restart);
    let s = game.snapshot();
    assert_eq!(s.score, 0);
    assert_eq!(s.scanned, 0);
    assert!(s.grid.is_empty());
    assert_eq!(s.game_state, GamePhase::Playing);
    assert_eq!(s.queue.len(), 3);
    assert!(s.detached.is_empty());
}

#[test]
fn test_scan_tally_then_commit() {
    let mut game = restarted(1);

    game.dispatch(&Event::Scan {
        scanned: heads(5, 3),
        end: false,
    });
    assert_eq!(game.snapshot().scanned, 5);

    game.dispatch(&Event::Scan {
        scanned: heads(3, 1),
        end: false,
    });
    assert_eq!(game.snapshot().scanned, 8);
    assert_eq!(game.score(), 0);

    // Reach score 100 through an earlier sweep
    let mut game100 = restarted(1);
    game100.dispatch(&Event::Scan {
        scanned: heads(100, 0),
        end: false,
    });
    game100.dispatch(&Event::Scan {
        scanned: vec![],
        end: true,
    });
    game100.dispatch(&Event::Scan {
        scanned: heads(8, 0),
        end: false,
    });
    assert_eq!(game100.score(), 100);

    game100.dispatch(&Event::Scan {
        scanned: heads(2, 0),
        end: true,
    });
    assert_eq!(game100.score(), 108);
    assert_eq!(game100.snapshot().scanned, 0);
}

#[test]
fn test_next_piece_rotation() {
    let mut game = restarted(3);
    let [a, b, c] = game.snapshot().queue;
    let p = Piece::new([[Color::Dark, Color::Dark], [Color::Light, Color::Dark]]);

    game.dispatch(&Event::NextPiece { next: p });
    let s = game.snapshot();
    assert_eq!(s.current.blocks, a);
    assert_eq!(s.queue, [b, c, p]);
}

#[test]
fn test_tick_frozen_outside_playing() {
    let mut game = restarted(8);
    game.dispatch(&Event::UpdateDetached {
        detached: vec![DetachedBlock::new(2.0, 0.0, Color::Light)],
    });
    game.tick(16, 16);

    for phase_event in [Event::Suspend, Event::GameOver, Event::Finish] {
        let mut g = game.clone();
        g.dispatch(&phase_event);
        let before: GameSnapshot = g.snapshot().clone();
        for i in 1..20u64 {
            g.tick(16 + i * 16, 16);
        }
        assert_eq!(g.snapshot(), &before, "{:?}", phase_event);
    }
}

#[test]
fn test_resume_continues_physics() {
    let mut game = restarted(2);
    game.dispatch(&Event::Suspend);
    game.tick(100, 100);
    assert_eq!(game.snapshot().game_time, 0);

    game.dispatch(&Event::Resume);
    game.tick(200, 100);
    assert_eq!(game.snapshot().game_time, 100);
    assert_eq!(game.snapshot().now, 200);
}

#[test]
fn test_piece_reaches_floor_and_stays() {
    let mut game = restarted(4);
    game.dispatch(&Event::Drop);
    let mut now = 0;
    for _ in 0..100 {
        now += 16;
        game.tick(now, 16);
    }
    let s = game.snapshot();
    assert!(s.current.is_grounded());
    assert_eq!(s.current.y, lumines::types::PIECE_FLOOR);
    assert!(s.current.dropped);
}

#[test]
fn test_scan_line_cycles_during_play() {
    let mut game = restarted(5);
    let mut now = 0;
    let mut wraps = 0;
    let mut last_x = game.snapshot().scan_line.x;
    for _ in 0..1010 {
        now += 16;
        game.tick(now, 16);
        let x = game.snapshot().scan_line.x;
        assert!((0.0..16.0).contains(&x));
        if x < last_x {
            wraps += 1;
        }
        last_x = x;
    }
    // Just over 16 seconds at 4 seconds per sweep
    assert_eq!(wraps, 4);
}
