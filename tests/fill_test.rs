use datagen::{
    fill_and_call, fill_randomly, DataKind, GeneratedValue, GeneratorError, IpAddress, Signature,
    Url, DEFAULT_STRING_LENGTH, DEFAULT_URL_LENGTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn register(username: String, homepage: Url) -> (String, Url) {
    (username, homepage)
}

#[test]
fn test_fill_function_with_string_and_url() {
    let mut rng = StdRng::seed_from_u64(42);

    let (username, homepage) = fill_randomly(&mut rng, register).unwrap();
    assert_eq!(username.chars().count(), DEFAULT_STRING_LENGTH);
    assert_eq!(homepage.to_string().len(), DEFAULT_URL_LENGTH);
}

#[test]
fn test_fill_runtime_signature() {
    let mut rng = StdRng::seed_from_u64(42);
    let signature = Signature::parse("username: str, homepage: url, age: int").unwrap();

    let rendered = fill_and_call(&mut rng, &signature, |args| {
        args.iter().map(GeneratedValue::to_string).collect::<Vec<_>>()
    })
    .unwrap();

    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0].chars().count(), DEFAULT_STRING_LENGTH);
    assert_eq!(rendered[1].len(), DEFAULT_URL_LENGTH);
    assert!(rendered[2].parse::<i64>().is_ok());
}

#[test]
fn test_fill_rejects_untyped_parameter() {
    let mut rng = StdRng::seed_from_u64(42);
    let signature = Signature::parse("username: str, payload").unwrap();

    let mut calls = 0;
    let result = fill_and_call(&mut rng, &signature, |_| calls += 1);
    assert!(matches!(result, Err(GeneratorError::ValueInvalid(_))));
    assert_eq!(calls, 0);
}

#[test]
fn test_fill_rejects_collection_parameter() {
    let mut rng = StdRng::seed_from_u64(42);
    let signature = Signature::default()
        .param("name", DataKind::Str)
        .param("tags", DataKind::Set);

    assert!(matches!(
        fill_and_call(&mut rng, &signature, |args| args.len()),
        Err(GeneratorError::TypeUnknown(_))
    ));
}

#[test]
fn test_fill_closure_with_ip() {
    let mut rng = StdRng::seed_from_u64(42);

    let ip = fill_randomly(&mut rng, |ip: IpAddress| ip).unwrap();
    assert!(ip.is_valid());
}
