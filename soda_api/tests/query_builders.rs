use soda_api::{Error, Operator, Selection, SoqlQuery, SortDirection};

const NO_EXTRAS: [(&str, &str); 0] = [];

#[test]
fn default_query_has_no_params() {
    let params = SoqlQuery::default().to_params("jjew-r69b", NO_EXTRAS).unwrap();
    assert!(params.is_empty());
    assert_eq!(params.get("select"), None);
    assert_eq!(params.get("where"), None);
    assert_eq!(params.get("order"), None);
}

#[test]
fn select_list_joins_names() {
    let params = SoqlQuery::default()
        .select(["a", "b"])
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("select"), Some("a,b"));
}

#[test]
fn select_star_omits_select() {
    let params = SoqlQuery::default()
        .select(["a", "b"])
        .select("*")
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("select"), None);
}

#[test]
fn select_empty_list_omits_select() {
    let query = SoqlQuery::default().select(Vec::<String>::new());
    assert_eq!(query.selection, Selection::AllFields);
    assert_eq!(query.to_params("id", NO_EXTRAS).unwrap().get("select"), None);
}

#[test]
fn select_comma_string() {
    let params = SoqlQuery::default()
        .select("applicant,location")
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("select"), Some("applicant,location"));
}

#[test]
fn where_calls_accumulate_in_order() {
    let query = SoqlQuery::default()
        .where_([("a__gt", 1)])
        .where_([("b__lte", 2), ("c", 3)])
        .where_([("d__ne", "'x'")]);
    assert_eq!(
        query.where_clause().as_deref(),
        Some("a>1 and b<=2 and c=3 and d!='x'")
    );

    // a later call never drops earlier terms
    let before = query.conditions.clone();
    let query = query.where_([("e", 5)]);
    assert_eq!(&query.conditions[..before.len()], &before[..]);
    assert_eq!(query.conditions.len(), before.len() + 1);
}

#[test]
fn every_suffix_emits_its_symbol_once() {
    let cases = [
        ("gt", ">"),
        ("gte", ">="),
        ("lt", "<"),
        ("lte", "<="),
        ("ne", "!="),
    ];
    for (suffix, symbol) in cases {
        let clause = SoqlQuery::default()
            .where_([(format!("score__{}", suffix), 10)])
            .where_clause()
            .unwrap();
        assert_eq!(clause, format!("score{}10", symbol));
        assert_eq!(clause.matches(symbol).count(), 1);
    }

    let clause = SoqlQuery::default()
        .where_([("score", 10)])
        .where_clause()
        .unwrap();
    assert_eq!(clause, "score=10");
}

#[test]
fn eq_suffix_stays_part_of_the_field() {
    let clause = SoqlQuery::default()
        .where_([("status__eq", "'A'")])
        .where_clause()
        .unwrap();
    assert_eq!(clause, "status__eq='A'");
}

#[test]
fn values_are_not_quoted_by_the_builder() {
    let clause = SoqlQuery::default()
        .where_([("applicant", "Taco Co"), ("location", "'5th St'")])
        .where_clause()
        .unwrap();
    assert_eq!(clause, "applicant=Taco Co and location='5th St'");
}

#[test]
fn typed_filter_mixes_with_lookup_keys() {
    let clause = SoqlQuery::default()
        .where_([("dayorder", 3)])
        .filter("end24", Operator::Gte, "'14:00'")
        .where_clause()
        .unwrap();
    assert_eq!(clause, "dayorder=3 and end24>='14:00'");
}

#[test]
fn order_by_direction() {
    let params = SoqlQuery::default()
        .order_by("applicant", SortDirection::Desc)
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("order"), Some("applicant DESC"));

    let params = SoqlQuery::default()
        .order_by("applicant", SortDirection::Desc)
        .order_asc("location")
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("order"), Some("location"));
}

#[test]
fn limit_and_offset() {
    let params = SoqlQuery::default()
        .limit(10)
        .offset(0)
        .to_params("id", NO_EXTRAS)
        .unwrap();
    assert_eq!(params.get("limit"), Some("10"));
    assert_eq!(params.get("offset"), Some("0"));
}

#[test]
fn missing_dataset_id() {
    let result = SoqlQuery::default().select(["a"]).to_params("", NO_EXTRAS);
    assert!(matches!(result, Err(Error::MissingIdentifier)));
}

#[test]
fn extras_pass_through_and_override() {
    let params = SoqlQuery::default()
        .select(["a"])
        .limit(10)
        .to_params("id", [("select", "b"), ("q", "taco")])
        .unwrap();
    assert_eq!(params.get("select"), Some("b"));
    assert_eq!(params.get("limit"), Some("10"));
    assert_eq!(params.get("q"), Some("taco"));
}
