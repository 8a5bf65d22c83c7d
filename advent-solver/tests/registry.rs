use advent_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistrationError,
    RegistryBuilder, SolveError, SolverError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["registry-test", "words"])]
struct WordCount;

impl AocParser for WordCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|w| w.len())
            .map(|w| w.to_string())
            .ok_or_else(|| SolveError::NoSolution("empty".into()))
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Length;

impl AocParser for Length {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim().len())
    }
}

impl PartSolver<1> for Length {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_create_and_solve() {
    let registry = RegistryBuilder::new()
        .register_solver::<WordCount>(2015, 2, &[])
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2015, 2, "alpha beta gamma epsilon")
        .unwrap();
    assert_eq!(solver.year(), 2015);
    assert_eq!(solver.day(), 2);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "4");
    assert_eq!(solver.solve(2).unwrap().answer, "epsilon");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_out_of_range_part_through_dyn_solver() {
    let registry = RegistryBuilder::new()
        .register_solver::<Length>(2015, 1, &[])
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 1, "abc").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
    assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = RegistryBuilder::new()
        .register_solver::<Length>(2015, 1, &[])
        .unwrap()
        .register_solver::<WordCount>(2015, 1, &[]);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2015, 1))
    ));
}

#[test]
fn test_invalid_year_day_rejected() {
    assert!(matches!(
        RegistryBuilder::new().register_solver::<Length>(2014, 1, &[]),
        Err(RegistrationError::InvalidYearDay(2014, 1))
    ));
    assert!(matches!(
        RegistryBuilder::new().register_solver::<Length>(2015, 26, &[]),
        Err(RegistrationError::InvalidYearDay(2015, 26))
    ));
}

#[test]
fn test_lookup_errors() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.is_empty());

    assert!(matches!(
        registry.create_solver(2015, 5, ""),
        Err(SolverError::NotFound(2015, 5))
    ));
    assert!(matches!(
        registry.create_solver(1999, 5, ""),
        Err(SolverError::InvalidYearDay(1999, 5))
    ));
}

#[test]
fn test_parse_error_surfaces_from_factory() {
    let registry = RegistryBuilder::new()
        .register_solver::<WordCount>(2015, 2, &[])
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2015, 2, "   "),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_metadata_is_sorted() {
    let registry = RegistryBuilder::new()
        .register_solver::<Length>(2017, 4, &["b"])
        .unwrap()
        .register_solver::<WordCount>(2015, 20, &["a"])
        .unwrap()
        .register_solver::<Length>(2015, 3, &[])
        .unwrap()
        .build();

    let keys: Vec<(u16, u8, u8)> = registry
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(keys, vec![(2015, 3, 1), (2015, 20, 2), (2017, 4, 1)]);
    assert_eq!(registry.years(), vec![2015, 2017]);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get_info(2015, 20).unwrap().tags, &["a"]);
    assert!(!registry.contains(2016, 1));
}

#[test]
fn test_plugins_filtered_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"registry-test"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let info = registry.get_info(2016, 3).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["registry-test", "words"]);

    let mut solver = registry.create_solver(2016, 3, "a bb ccc").unwrap();
    assert_eq!(solver.solve(2).unwrap().answer, "ccc");
}
