use super::*;

#[test]
fn predicate_equality_is_field_wise() {
    let a = Predicate::new(2, 0, false);
    let b = Predicate::new(2, 0, false);
    let c = Predicate::new(2, 0, true);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn predicate_is_copy() {
    let a = Predicate::new(1, 3, true);
    let copy = a;
    assert_eq!(a, copy);
}

#[test]
fn precedence_ordering() {
    assert!(PrecedencePredicate::new(2) < PrecedencePredicate::new(5));
}

#[test]
fn context_dependence() {
    assert!(!SemanticContext::None.is_ctx_dependent());
    assert!(!SemanticContext::from(Predicate::new(0, 0, false)).is_ctx_dependent());
    assert!(SemanticContext::from(Predicate::new(0, 0, true)).is_ctx_dependent());
    assert!(SemanticContext::from(PrecedencePredicate::new(3)).is_ctx_dependent());
}

#[test]
fn default_is_none() {
    assert!(SemanticContext::default().is_none());
}

#[test]
fn display() {
    assert_eq!(Predicate::new(4, 1, false).to_string(), "{4:1}?");
    assert_eq!(PrecedencePredicate::new(3).to_string(), "{3>=prec}?");
    assert_eq!(SemanticContext::None.to_string(), "{true}?");
    assert_eq!(
        SemanticContext::from(Predicate::new(0, 2, true)).to_string(),
        "{0:2}?"
    );
}

#[test]
fn none_predicate_is_an_always_true_placeholder() {
    let none = Predicate::NONE;

    assert!(none.is_none());
    assert!(!none.is_ctx_dependent);
    assert!(!Predicate::new(0, 0, false).is_none());
    assert_eq!(none.to_string(), "{true}?");
    assert_eq!(none.to_string(), SemanticContext::None.to_string());
    assert_ne!(none, Predicate::new(0, 0, false));
}
