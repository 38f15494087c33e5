use arbnum::expr::RationalExpression;
use arbsearch::{
    config::SearchConfig,
    subset::{MAX_SUBSET_ITEMS, MatchMode, SubsetProblem, SubsetSearch},
    utils::error::SearchError,
};

fn single(c: i64, a: i64, b: i64) -> RationalExpression {
    RationalExpression::from_term(c, a, b).expect("valid term")
}

fn unit_fraction_problem() -> SubsetProblem {
    SubsetProblem::new(
        vec![single(1, 1, 3), single(1, 1, 2), single(1, 1, 6), single(1, 1, 4)],
        single(1, 1, 1),
    )
}

#[test]
fn structural_search_never_matches_multi_term_sums() {
    let problem = unit_fraction_problem();
    let search = SubsetSearch::new(&problem, MatchMode::Structural).unwrap();

    assert_eq!(search.subset_count(), 15);
    assert!(search.solutions().unwrap().is_empty());
}

#[test]
fn value_search_finds_exact_subset() {
    let problem = unit_fraction_problem();
    let search = SubsetSearch::new(&problem, MatchMode::Value).unwrap();

    let solutions = search.solutions().unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].indices, vec![0, 1, 2]);
    assert_eq!(solutions[0].mask, 0b0111);
    assert_eq!(
        solutions[0].sum.to_string(),
        "1*(1/3) + 1*(1/2) + 1*(1/6)"
    );
}

#[test]
fn structural_search_matches_identical_term_sequences() {
    let problem = SubsetProblem::new(
        vec![single(1, 1, 3), single(1, 1, 1), single(1, 2, 3)],
        single(1, 1, 3) + single(1, 2, 3),
    );

    let structural = SubsetSearch::new(&problem, MatchMode::Structural)
        .unwrap()
        .solutions()
        .unwrap();
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].indices, vec![0, 2]);

    // {1} alone equals the target value but not its terms.
    let by_value = SubsetSearch::new(&problem, MatchMode::Value)
        .unwrap()
        .solutions()
        .unwrap();
    let indices = by_value.iter().map(|m| m.indices.clone()).collect::<Vec<_>>();
    assert_eq!(indices, vec![vec![1], vec![0, 2]]);
}

#[test]
fn feature_selection_finds_unit_sum() {
    let weights = [(1, 5), (2, 7), (1, 3), (3, 10), (5, 20), (7, 14)];
    let problem = SubsetProblem::new(
        weights.iter().map(|&(a, b)| single(1, a, b)).collect(),
        single(1, 1, 1),
    );

    let search = SubsetSearch::with_config(&problem, &SearchConfig::default()).unwrap();
    let mut visited = Vec::new();
    let count = search.for_each_match(|m| visited.push(m.indices)).unwrap();

    assert_eq!(count, 1);
    assert_eq!(visited, vec![vec![0, 3, 5]]);
}

#[test]
fn subset_sum_concatenates_in_index_order() {
    let problem = unit_fraction_problem();
    let search = SubsetSearch::new(&problem, MatchMode::Value).unwrap();
    assert_eq!(search.subset_sum(0b1010).unwrap().to_string(), "1*(1/2) + 1*(1/4)");
    assert!(search.subset_sum(0).unwrap().is_empty());
}

#[test]
fn empty_problem_has_no_subsets() {
    let problem = SubsetProblem::new(Vec::new(), RationalExpression::new());
    let search = SubsetSearch::new(&problem, MatchMode::Structural).unwrap();
    assert_eq!(search.subset_count(), 0);
    assert!(search.solutions().unwrap().is_empty());
}

#[test]
fn too_many_items_is_rejected() {
    let problem = SubsetProblem::new(
        vec![single(1, 1, 2); MAX_SUBSET_ITEMS + 1],
        single(1, 1, 1),
    );
    let err = SubsetSearch::new(&problem, MatchMode::Value).err().unwrap();
    assert!(matches!(
        err,
        SearchError::TooManyItems { count: 64, max: 63 }
    ));
}

#[test]
fn problem_loads_from_toml() {
    let problem = SubsetProblem::from_toml_str(
        r#"
        target = [[1, 1, 1]]
        items = [[[1, 1, 3]], [[1, 1, 2]], [[1, 1, 6]], [[1, 1, 4]]]
        "#,
    )
    .unwrap();
    assert_eq!(problem, unit_fraction_problem());

    let err = SubsetProblem::from_toml_str("target = [[1, 1, 0]]\nitems = []").unwrap_err();
    assert!(matches!(err, SearchError::ConfigParseError { .. }));
}
