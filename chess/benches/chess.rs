use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rookery::{movegen, moves, Board, Coord, EscapeScan, Side};

const BOARDS: [(&str, &str); 10] = [
    ("initial", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "sicilian",
        "r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R",
    ),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K",
    ),
    ("open_position", "4r1k1/3R1ppp/8/5P2/p7/6PP/4pK2/1rN1B3"),
    ("queen", "6K1/8/8/1k3q2/3Q4/8/8/8"),
    ("pawn_move", "4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3"),
    ("pawn_attack", "4k3/8/8/pppppppp/PPPPPPPP/8/8/4K3"),
    ("fools_mate", "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR"),
    ("cydonia", "5K2/1N1N1N2/8/1N1N1N2/1n1n1n2/8/1n1n1n2/5k2"),
    ("max", "3Q4/1Q4Q1/4Q3/2Q4R/Q4Q2/3Q4/NR4Q1/kN1BB1K1"),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, fen)| (name, Board::from_fen(fen).unwrap()))
}

fn bench_gen_semilegal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_semilegal");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::gen_semilegal(&board, Side::White).len()))
        });
    }
}

fn bench_gen_legal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_legal");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(movegen::gen_legal(&board, Side::White).len()))
        });
    }
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");
    for (name, mut board) in boards() {
        let list = movegen::gen_semilegal(&board, Side::White);
        group.bench_function(name, |b| {
            b.iter(|| {
                for mv in &list {
                    let u = moves::make_move_unchecked(&mut board, *mv);
                    moves::unmake_move_unchecked(&mut board, *mv, u);
                }
            })
        });
    }
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_move");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for src in board.pieces_of(Side::White) {
                    for dst in Coord::iter() {
                        let mut copy = board.clone();
                        black_box(copy.attempt_move(Side::White, src, dst));
                    }
                }
            })
        });
    }
}

fn bench_is_attacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_attacked");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for side in Side::ALL {
                    for coord in Coord::iter() {
                        black_box(movegen::is_cell_attacked(&board, coord, side));
                    }
                }
            })
        });
    }
}

fn bench_is_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_check");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.is_check(Side::White)))
        });
    }
}

fn bench_is_checkmate(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_checkmate");
    for (name, board) in boards() {
        for (scan_name, scan) in [("full", EscapeScan::Full), ("vacant", EscapeScan::VacantOnly)] {
            group.bench_function(format!("{}/{}", name, scan_name), |b| {
                b.iter(|| black_box(board.is_checkmate_with(Side::White, scan)))
            });
        }
    }
}

fn bench_has_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_legal_moves");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.has_legal_moves(Side::White)))
        });
    }
}

criterion_group!(
    chess,
    bench_gen_semilegal,
    bench_gen_legal,
    bench_make_move,
    bench_attempt_move,
    bench_is_attacked,
    bench_is_check,
    bench_is_checkmate,
    bench_has_legal_moves,
);

criterion_main!(chess);
