//! Tests for the turn controller state machine.

use hotseat_tictactoe::{
    Cell, Effect, EffectLog, Input, Mark, Outcome, Transition, TurnController, TurnState,
};

fn new_game() -> TurnController<EffectLog> {
    TurnController::new("Player X", "Player O", EffectLog::new())
}

fn play(game: &mut TurnController<EffectLog>, cells: &[usize]) {
    for &index in cells {
        game.handle(Input::CellClicked(index));
    }
}

#[test]
fn test_initialization_renders_and_prompts_once() {
    let game = new_game();

    assert_eq!(
        game.renderer().effects(),
        &[
            Effect::RenderBoard([Cell::Empty; 9]),
            Effect::ShowMessage("Player X's turn".to_string()),
        ]
    );
    assert_eq!(game.state(), TurnState::AwaitingMove { current: Mark::X });
    assert_eq!(game.current_player().name(), "Player X");
    assert!(!game.is_game_over());
}

#[test]
fn test_players_are_fixed() {
    let game = TurnController::new("Ada", "Grace", EffectLog::new());
    let [x, o] = game.players();
    assert_eq!((x.name().as_str(), *x.mark()), ("Ada", Mark::X));
    assert_eq!((o.name().as_str(), *o.mark()), ("Grace", Mark::O));
}

#[test]
fn test_move_renders_then_switches_turn() {
    let mut game = new_game();
    game.renderer_mut().take();

    let transition = game.handle(Input::CellClicked(4));
    assert_eq!(transition, Transition::Moved);

    let mut expected = [Cell::Empty; 9];
    expected[4] = Cell::Marked(Mark::X);
    assert_eq!(
        game.renderer().effects(),
        &[
            Effect::RenderBoard(expected),
            Effect::ShowMessage("Player O's turn".to_string()),
        ]
    );
    assert_eq!(game.current_player().name(), "Player O");
}

#[test]
fn test_alternation_returns_to_first_player() {
    let mut game = new_game();
    assert_eq!(*game.current_player().mark(), Mark::X);

    game.handle(Input::CellClicked(0));
    assert_eq!(*game.current_player().mark(), Mark::O);

    game.handle(Input::CellClicked(8));
    assert_eq!(*game.current_player().mark(), Mark::X);
}

#[test]
fn test_each_move_changes_only_the_clicked_cell() {
    let mut game = new_game();
    let moves = [4, 0, 2, 6, 3, 5, 1, 7];
    let mut mark = Mark::X;

    for index in moves {
        let before = game.board().get_board();
        assert_eq!(game.handle(Input::CellClicked(index)), Transition::Moved);
        let after = game.board().get_board();

        for i in 0..9 {
            let expected = if i == index { Cell::Marked(mark) } else { before[i] };
            assert_eq!(after[i], expected);
        }
        mark = mark.opponent();
    }
}

#[test]
fn test_rejected_click_has_no_side_effects() {
    let mut game = new_game();

    // X takes 0, then O clicks 0 again.
    game.handle(Input::CellClicked(0));
    game.renderer_mut().take();

    assert_eq!(game.handle(Input::CellClicked(0)), Transition::Ignored);
    assert_eq!(game.handle(Input::CellClicked(9)), Transition::Ignored);
    assert!(game.renderer().effects().is_empty());
    assert_eq!(game.current_player().name(), "Player O");
}

#[test]
fn test_occupied_click_scenario() {
    let mut game = new_game();

    game.handle(Input::CellClicked(0));
    assert_eq!(game.renderer().last_message(), Some("Player O's turn"));

    game.handle(Input::CellClicked(0));
    assert_eq!(game.renderer().last_message(), Some("Player O's turn"));

    game.handle(Input::CellClicked(1));

    let mut expected = [Cell::Empty; 9];
    expected[0] = Cell::Marked(Mark::X);
    expected[1] = Cell::Marked(Mark::O);
    assert_eq!(game.board().get_board(), expected);
    assert_eq!(game.current_player().name(), "Player X");
    assert!(!game.is_game_over());
}

#[test]
fn test_win_announced_without_turn_switch() {
    let mut game = new_game();
    // X: 0, 1, 2 (top row). O: 3, 4.
    play(&mut game, &[0, 3, 1, 4]);
    game.renderer_mut().take();

    let transition = game.handle(Input::CellClicked(2));
    assert_eq!(transition, Transition::Finished(Outcome::Win(Mark::X)));
    let top_row = [Cell::Marked(Mark::X); 3];
    assert_eq!(game.renderer().last_board().map(|b| &b[..3]), Some(&top_row[..]));

    let effects = game.renderer().effects();
    assert_eq!(effects.len(), 2);
    assert!(matches!(effects[0], Effect::RenderBoard(_)));
    assert_eq!(effects[1], Effect::ShowMessage("Player X Wins!".to_string()));
    assert_eq!(game.state(), TurnState::GameOver(Outcome::Win(Mark::X)));
    assert_eq!(game.current_player().name(), "Player X");
}

#[test]
fn test_second_player_can_win() {
    let mut game = TurnController::new("Ada", "Grace", EffectLog::new());
    // X: 0, 1, 8. O: 2, 4, 6 (anti-diagonal).
    play(&mut game, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(game.outcome(), Some(Outcome::Win(Mark::O)));
    assert_eq!(game.renderer().last_message(), Some("Grace Wins!"));
}

#[test]
fn test_tie_announced() {
    let mut game = new_game();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert!(!game.is_game_over());

    let transition = game.handle(Input::CellClicked(8));
    assert_eq!(transition, Transition::Finished(Outcome::Tie));
    assert_eq!(game.renderer().last_message(), Some("It is Tie!"));
    assert!(game.is_game_over());
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut game = new_game();
    // X O X / O X O / O X X: final X at 8 completes the main diagonal.
    play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert_eq!(game.outcome(), Some(Outcome::Win(Mark::X)));
    assert_eq!(game.renderer().last_message(), Some("Player X Wins!"));
}

#[test]
fn test_clicks_after_game_over_are_ignored() {
    let mut game = new_game();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_game_over());

    let board = game.board().get_board();
    game.renderer_mut().take();

    for index in [5, 6, 7, 8, 0, 42] {
        assert_eq!(game.handle(Input::CellClicked(index)), Transition::Ignored);
    }
    assert!(game.renderer().effects().is_empty());
    assert_eq!(game.board().get_board(), board);
    assert_eq!(game.state(), TurnState::GameOver(Outcome::Win(Mark::X)));
}

#[test]
fn test_reset_from_game_over() {
    let mut game = new_game();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.renderer_mut().take();

    assert_eq!(game.handle(Input::ResetRequested), Transition::Reset);
    assert_eq!(
        game.renderer().effects(),
        &[
            Effect::RenderBoard([Cell::Empty; 9]),
            Effect::ShowMessage("Player X's turn".to_string()),
        ]
    );
    assert_eq!(game.state(), TurnState::INITIAL);
    assert_eq!(game.board().get_board(), [Cell::Empty; 9]);

    // Play resumes normally.
    assert_eq!(game.handle(Input::CellClicked(4)), Transition::Moved);
}

#[test]
fn test_clicks_after_tie_are_ignored() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.outcome(), Some(Outcome::Tie));

    let board = game.board().get_board();
    game.renderer_mut().take();

    for index in [0, 4, 8, 9] {
        assert_eq!(game.handle(Input::CellClicked(index)), Transition::Ignored);
    }
    assert!(game.renderer().effects().is_empty());
    assert_eq!(game.board().get_board(), board);
    assert_eq!(game.state(), TurnState::GameOver(Outcome::Tie));
}

#[test]
fn test_reset_repeats_the_startup_effects() {
    let mut game = new_game();
    let startup = game.renderer_mut().take();

    play(&mut game, &[4, 0, 8]);
    game.renderer_mut().take();
    game.handle(Input::ResetRequested);

    assert_eq!(game.renderer().effects(), startup.as_slice());
}

#[test]
fn test_reset_mid_game_gives_x_the_move() {
    let mut game = new_game();
    play(&mut game, &[4]);
    assert_eq!(*game.current_player().mark(), Mark::O);

    game.handle(Input::ResetRequested);
    assert_eq!(*game.current_player().mark(), Mark::X);

    // A stale click on the old cell now succeeds for X.
    assert_eq!(game.handle(Input::CellClicked(4)), Transition::Moved);
    assert_eq!(game.board().get_board()[4], Cell::Marked(Mark::X));
}

#[test]
fn test_snapshot_serializes() {
    let mut game = new_game();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let snapshot = game.snapshot();
    assert!(snapshot.game_over);
    assert_eq!(snapshot.outcome, Some(Outcome::Win(Mark::X)));
    assert_eq!(snapshot.current_player, "Player X");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["game_over"], serde_json::json!(true));
    assert_eq!(json["board"][0], serde_json::json!({ "Marked": "X" }));
    assert_eq!(json["board"][5], serde_json::json!("Empty"));
}
