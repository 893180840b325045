use knightboard_lib::{Mode, Outcome, run};

fn ok(mode: Mode, input: &str) -> Outcome {
    run(mode, false, input).unwrap()
}

fn move_lines(stdout: &str) -> Vec<(i32, i32)> {
    stdout
        .lines()
        .map(|l| {
            let (x, y) = l.split_once('\t').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

#[test]
fn shortest_single_move() {
    let out = ok(Mode::Shortest, "8 8 1 2 3 3\n");
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout, "+2\t+1\n");
}

#[test]
fn shortest_corner_to_corner() {
    let out = ok(Mode::Shortest, "8 8 0 0 7 7\n");
    let moves = move_lines(&out.stdout);
    assert_eq!(moves.len(), 6);
    let end = moves
        .iter()
        .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert_eq!(end, (7, 7));
}

#[test]
fn start_is_destination_prints_nothing() {
    for mode in [Mode::Any, Mode::Shortest, Mode::Longest] {
        assert_eq!(ok(mode, "5 5 2 2 2 2\n").stdout, "", "{mode:?}");
    }
}

#[test]
fn any_takes_the_first_rule_move() {
    assert_eq!(ok(Mode::Any, "8 8 0 0 1 2").stdout, "+1\t+2\n");
}

#[test]
fn unreachable_center_prints_null() {
    for mode in [Mode::Any, Mode::Shortest, Mode::Longest] {
        let out = ok(mode, "3 3 0 0 1 1\n");
        assert_eq!(out.stdout, "NULL\n", "{mode:?}");
        assert_eq!(out.code, 0);
    }
}

#[test]
fn longest_walks_around_the_3x3_ring() {
    let out = ok(Mode::Longest, "3 3 0 0 2 1\n");
    let moves = move_lines(&out.stdout);
    assert_eq!(moves.len(), 7);
    let end = moves
        .iter()
        .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert_eq!(end, (2, 1));
}

#[test]
fn weighted_teleport_jump() {
    let input = "\
0 0 7 7
T . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . T
";
    assert_eq!(ok(Mode::Weighted, input).stdout, "0\n+7\t+7\n");
}

#[test]
fn weighted_prints_cost_first() {
    let input = "0 0 4 2\n. . . . .\n. . W . .\n. . . . .\n";
    assert_eq!(ok(Mode::Weighted, input).stdout, "3\n+2\t+1\n+2\t+1\n");
}

#[test]
fn weighted_no_path() {
    let input = "0 0 1 0\n. R\n. .\n";
    assert_eq!(ok(Mode::Weighted, input).stdout, "NO_PATH\n");
}

#[test]
fn weighted_rejects_bad_grids() {
    assert!(run(Mode::Weighted, false, "0 0 1 1\n. .\n. . .\n").is_err());
    assert!(run(Mode::Weighted, false, "0 0 1 1\n. x\n. .\n").is_err());
    assert!(run(Mode::Weighted, false, "0 0 1 1\n").is_err());
}

#[test]
fn validate_verbose_trace() {
    let out = ok(Mode::Validate, "3 3 0 0 1\n2 1\n");
    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout,
        concat!(
            "depth_: 3\nwidth_: 3\nstartX_: 0\nstartY_: 0\nverbose_: 1\n",
            "K . . \n. . . \n. . . \n",
            "Apply knight move (2, 1).\n",
            ". . . \n. . K \n. . . \n",
        )
    );
}

#[test]
fn validate_verbose_rejection_message() {
    let out = run(Mode::Validate, true, "8 8 1 2\n-1 -2\n-1 -2\n").unwrap();
    assert_eq!(out.code, 1);
    assert!(out.stdout.ends_with(
        "After applying knight move (-1, -2), new position (-1, -2) is outside the board.\n"
    ));
}

#[test]
fn validate_uses_default_board() {
    // 8x8 with the knight on (1, 2).
    assert_eq!(ok(Mode::Validate, "\n2 1\n2 1\n2 1\n").code, 0);
    assert_eq!(ok(Mode::Validate, "\n2 1\n2 1\n2 1\n2 1\n").code, 1);
}

#[test]
fn search_results_replay_under_validate() {
    let out = ok(Mode::Shortest, "6 7 0 0 6 5\n");
    let input = format!("6 7 0 0\n{}", out.stdout.replace('\t', " "));
    assert_eq!(ok(Mode::Validate, &input).code, 0);
}

#[test]
fn validate_off_the_right_edge_of_a_huge_board() {
    let out = ok(Mode::Validate, "3 2147483647 2147483646 0\n2 1\n");
    assert_eq!(out.code, 1);
    let out = ok(Mode::Validate, "3 2147483647 2147483646 0\n-2 1\n");
    assert_eq!(out.code, 0);
}

#[test]
fn weighted_ties_prefer_the_smaller_column() {
    let input = "0 0 3 3\n. . . .\n. . . .\n. . . .\n. . . .\n";
    assert_eq!(ok(Mode::Weighted, input).stdout, "2\n+1\t+2\n+2\t+1\n");
}
