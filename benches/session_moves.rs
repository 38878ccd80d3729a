//! Move throughput on the reference board.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordclaim::board::Board;
use wordclaim::core::{CellIndex, GameRng, RoomId, SessionConfig, Side};
use wordclaim::rules::legal_moves;
use wordclaim::session::{GameSession, Phase, SessionEvent};
use wordclaim::words::WordPool;

fn started_session() -> GameSession {
    let mut session = GameSession::new(
        RoomId::new(1),
        Arc::new(SessionConfig::reference()),
        Arc::new(WordPool::reference()),
        GameRng::new(42),
    )
    .unwrap();
    session.handle(SessionEvent::RoomReady).unwrap();
    session.handle(SessionEvent::CountdownElapsed).unwrap();
    session
}

fn play_out(session: &mut GameSession) {
    while session.phase() == Phase::Active {
        let side = session.turn();
        let cell = legal_moves(session.board(), side)[0];
        session.handle(SessionEvent::MoveRequested { side, cell }).unwrap();
    }
}

fn bench_full_game(c: &mut Criterion) {
    let session = started_session();

    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut session = session.clone();
            play_out(&mut session);
            black_box(session.round_number())
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut board = Board::new(144, 12).unwrap();
    for i in (0..144).step_by(5) {
        board.set_owner(CellIndex::new(i), Side::A.into());
    }

    c.bench_function("legal_moves", |b| b.iter(|| legal_moves(black_box(&board), Side::A)));
}

fn bench_board_clone(c: &mut Criterion) {
    let mut session = started_session();
    for _ in 0..40 {
        let side = session.turn();
        let cell = legal_moves(session.board(), side)[0];
        session.handle(SessionEvent::MoveRequested { side, cell }).unwrap();
    }

    c.bench_function("board_clone", |b| b.iter(|| black_box(session.board().clone())));
}

criterion_group!(benches, bench_full_game, bench_legal_moves, bench_board_clone);
criterion_main!(benches);
