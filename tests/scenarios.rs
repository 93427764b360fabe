use mastermind_solver::MastermindError;
use mastermind_solver::commands::{SolveConfig, solve_code};
use mastermind_solver::core::{Code, Feedback, GameConfig, HiddenCode, Oracle};
use mastermind_solver::solver::{FirstCandidateStrategy, Solver, Strategy, StrategyType};
use mastermind_solver::space::CodeSpace;

fn play<S: Strategy>(solver: &mut Solver<S>, hidden: &Code) -> usize {
    let mut oracle = HiddenCode::new(hidden.clone(), solver.config()).unwrap();
    let result = solve_code(solver, &mut oracle, SolveConfig::default()).unwrap();
    assert!(result.success, "failed to solve {hidden}");
    result.num_guesses()
}

#[test]
fn four_colors_three_pegs_finds_abc() {
    let config = GameConfig::new(4, 3, true).unwrap();
    let hidden: Code = "ABC".parse().unwrap();
    let mut solver = Solver::new(FirstCandidateStrategy, config);

    let guesses = play(&mut solver, &hidden);

    assert!(guesses <= 64);
    assert_eq!(solver.remaining_count(), 1);
    assert_eq!(solver.candidates()[0], hidden);
    assert_eq!(solver.history().last().unwrap().1, Feedback::perfect(3));
}

#[test]
fn no_duplicate_game_starts_with_360_candidates() {
    let config = GameConfig::new(6, 4, false).unwrap();
    let solver = Solver::new(FirstCandidateStrategy, config);

    assert_eq!(solver.remaining_count(), 360);
    assert!(solver.candidates().iter().all(|c| !c.has_duplicates()));
    assert_eq!(solver.next_guess().unwrap(), "ABCD".parse().unwrap());
}

#[test]
fn scoring_examples() {
    let score = |g: &str, t: &str| Feedback::calculate(&g.parse().unwrap(), &t.parse().unwrap());

    assert_eq!(score("RGBY", "RRGB"), Feedback::new(1, 2));
    assert_eq!(score("RRGG", "GGRR"), Feedback::new(0, 4));
    assert_eq!(score("ABCD", "ABCD"), Feedback::new(4, 0));
    assert_eq!(score("AABB", "CCDD"), Feedback::new(0, 0));
}

#[test]
fn every_strategy_solves_sample_codes() {
    let config = GameConfig::new(5, 3, true).unwrap();
    let hidden: Vec<Code> = CodeSpace::new(config).iter().step_by(17).collect();

    for name in StrategyType::NAMES {
        let mut solver = Solver::new(StrategyType::from_name(name).unwrap(), config);
        for code in &hidden {
            let guesses = play(&mut solver, code);
            assert!(guesses <= 125, "{name} took {guesses} guesses on {code}");
        }
    }
}

#[test]
fn knuth_solves_every_classic_code_in_five() {
    let config = GameConfig::default();
    let space = CodeSpace::new(config);
    let mut solver = Solver::new(StrategyType::default(), config);

    let worst = space
        .iter()
        .step_by(7)
        .map(|code| play(&mut solver, &code))
        .max()
        .unwrap();
    assert!(worst <= 5);
}

#[test]
fn closure_strategy_plugs_into_the_solver() {
    let config = GameConfig::new(4, 3, true).unwrap();
    let last_candidate = |_: &CodeSpace, candidates: &[Code]| candidates.last().cloned();
    let mut solver = Solver::new(last_candidate, config);

    assert_eq!(solver.next_guess().unwrap(), "DDD".parse().unwrap());
    play(&mut solver, &"BAD".parse().unwrap());
    assert_eq!(solver.candidates(), &["BAD".parse::<Code>().unwrap()]);
}

#[test]
fn contradictory_feedback_is_reported_and_undoable() {
    let config = GameConfig::new(4, 3, true).unwrap();
    let mut solver = Solver::new(FirstCandidateStrategy, config);
    let guess: Code = "ABC".parse().unwrap();

    solver.apply_feedback(guess.clone(), Feedback::new(3, 0)).unwrap();
    solver.apply_feedback(guess, Feedback::new(0, 3)).unwrap();

    assert_eq!(
        solver.next_guess(),
        Err(MastermindError::DomainExhausted { observations: 2 })
    );

    solver.undo();
    assert_eq!(solver.next_guess().unwrap(), "ABC".parse().unwrap());
}

#[test]
fn manual_oracle_loop() {
    struct Counting<'a> {
        secret: &'a Code,
        calls: usize,
    }
    impl Oracle for Counting<'_> {
        fn score(&mut self, guess: &Code) -> Feedback {
            self.calls += 1;
            Feedback::calculate(guess, self.secret)
        }
    }

    let secret: Code = "FEDC".parse().unwrap();
    let config = GameConfig::new(6, 4, false).unwrap();
    let mut solver = Solver::new(StrategyType::from_name("entropy").unwrap(), config);
    let mut oracle = Counting {
        secret: &secret,
        calls: 0,
    };

    let result = solve_code(&mut solver, &mut oracle, SolveConfig::new()).unwrap();
    assert!(result.success);
    assert_eq!(oracle.calls, result.num_guesses());
    assert!(
        result
            .guesses
            .iter()
            .all(|step| step.guess.is_valid_for(&config))
    );
}
