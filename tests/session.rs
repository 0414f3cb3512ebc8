use sci_calc::calculator::{CALCULATION_ERROR, MEMORY_ERROR, transition};
use sci_calc::keys::all_keys;
use sci_calc::{AngleMode, CalculatorState, Event, format_number, resolve};

/// Press each word as a key on `state`.
fn press(state: &mut CalculatorState, words: &str) {
    for word in words.split_whitespace() {
        let event = resolve(word).unwrap_or_else(|e| panic!("{e}"));
        state.apply(&event);
    }
}

fn fresh(words: &str) -> CalculatorState {
    let mut state = CalculatorState::default();
    press(&mut state, words);
    state
}

#[test]
fn test_add_and_submit() {
    let state = fresh("5 + 3 =");
    assert_eq!(state.display(), "8");
    assert_eq!(state.last_expression(), Some("5+3"));
}

#[test]
fn test_keypad_labels_build_expression() {
    let state = fresh("7 × 6 − 2 ÷ 4");
    assert_eq!(state.expression(), "7*6-2/4");
    let state = fresh("7 × 6 − 2 ÷ 4 =");
    assert_eq!(state.display(), "41.5");
}

#[test]
fn test_leading_zero_rules() {
    assert_eq!(fresh(".").expression(), "0.");
    assert_eq!(fresh("7").expression(), "7");
    assert_eq!(fresh("π").expression(), "pi");
}

#[test]
fn test_backspace_resets_short_expressions() {
    assert_eq!(fresh("⌫").expression(), "0");
    assert_eq!(fresh("9 ⌫").expression(), "0");
    assert_eq!(fresh("sin ⌫").expression(), "sin");
}

#[test]
fn test_negate_self_inverse() {
    for words in ["4", "1 2 . 5", "sin 3 0 )"] {
        let before = fresh(words);
        let after = transition(transition(before.clone(), &Event::Negate), &Event::Negate);
        assert_eq!(after.expression(), before.expression());
    }
    assert_eq!(fresh("±").expression(), "0");
    assert_eq!(fresh("- ±").expression(), "0");
    assert_eq!(fresh("- ± .").expression(), "0.");
}

#[test]
fn test_division_by_zero() {
    let state = fresh("1 / 0 =");
    assert_eq!(state.error(), Some(CALCULATION_ERROR));
    assert_eq!(state.expression(), "1/0");

    let snapshot = state.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some(CALCULATION_ERROR));
}

#[test]
fn test_angle_mode_only_affects_trig() {
    let mut rad = fresh("sin 9 0 )");
    let mut deg = rad.clone();
    deg.apply(&Event::ToggleAngleMode);
    assert_eq!(deg.expression(), rad.expression());
    assert_eq!(deg.angle_mode(), AngleMode::Deg);

    rad.apply(&Event::Submit);
    deg.apply(&Event::Submit);
    assert_eq!(deg.display(), "1");
    assert_eq!(rad.display(), "0.893996663601");
}

#[test]
fn test_memory_round_trip() {
    let mut state = fresh("3 x² + 1");
    press(&mut state, "M+ M+ M-");
    assert_eq!(state.memory(), 10.0);
    assert!(state.snapshot().memory_indicator);

    press(&mut state, "M-");
    assert_eq!(state.memory(), 0.0);
    assert!(!state.snapshot().memory_indicator);
}

#[test]
fn test_memory_failure() {
    let mut state = fresh("2 M+ ( ");
    press(&mut state, "M+");
    assert_eq!(state.memory(), 2.0);
    assert_eq!(state.error(), Some(MEMORY_ERROR));

    press(&mut state, "MR");
    assert_eq!(state.expression(), "2(2");
    assert_eq!(state.error(), None);
}

#[test]
fn test_memory_overflow() {
    let mut state = fresh("1 0 xʸ 3 0 8 M+");
    let stored = state.memory();
    press(&mut state, "M+");
    assert_eq!(state.memory(), stored);
    assert_eq!(state.error(), Some(MEMORY_ERROR));
    assert!(state.memory().is_finite());
}

#[test]
fn test_percent() {
    let state = fresh("5 0 %");
    assert_eq!(state.display(), "0.5");
    assert_eq!(state.last_expression(), None);
}

#[test]
fn test_scientific_keys() {
    assert_eq!(fresh("√ 1 6 ) =").display(), "4");
    assert_eq!(fresh("log 1 0 0 0 ) =").display(), "3");
    assert_eq!(fresh("ln e ) =").display(), "1");
    assert_eq!(fresh("|x| - 3 ) =").display(), "3");
    assert_eq!(fresh("2 xʸ 1 0 =").display(), "1024");
    assert_eq!(fresh("4 ! =").display(), "24");
    assert_eq!(fresh("( 2 + 1 ) ! =").display(), "6");
    assert_eq!(fresh("0 . 5 ! =").error(), Some(CALCULATION_ERROR));
    assert_eq!(fresh("Exp =").display(), "2.71828182846");
}

#[test]
fn test_large_results_use_scientific_notation() {
    let state = fresh("1 0 xʸ 1 0 =");
    assert_eq!(state.display(), "1.00000000e10");

    let state = fresh("1 ÷ 1 0 xʸ 7 =");
    assert_eq!(state.display(), "1.00000000e-7");
}

#[test]
fn test_format_properties() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(f64::NAN), "Error");
    assert_eq!(format_number(f64::INFINITY), "Error");
    assert_eq!(format_number(123.000000000001), "123");

    for value in [0.1 + 0.2, 2.0 / 3.0, -98765.4321, 4.2e15, 7.5e-9, 1.0000000004e9] {
        let once = format_number(value);
        let again = format_number(once.parse().unwrap());
        assert_eq!(once, again);
    }
}

#[test]
fn test_every_state_accepts_every_key() {
    let presses = "AC 1 . . 5 ± % x² xʸ 2 ! = MC MR M+ M- DEG/RAD \
                   ⌫ sin ( ) π e Exp = ⌫ ⌫ ⌫ ⌫";
    let mut state = CalculatorState::new(AngleMode::Deg);
    for word in presses.split_whitespace() {
        state.apply(&resolve(word).unwrap());
        assert!(!state.expression().is_empty());
        assert!(!state.display().is_empty());
    }
}

#[test]
fn test_edge_states_accept_every_key() {
    for start in ["AC", "-", ".", "- .", "1 / 0 =", "1 0 xʸ 3 0 8 M+ M+"] {
        for key in all_keys() {
            let mut state = fresh(start);
            state.apply(&key.event());
            assert!(!state.expression().is_empty(), "{start} then {}", key.label);
            assert!(!state.display().is_empty(), "{start} then {}", key.label);
        }
    }
}
