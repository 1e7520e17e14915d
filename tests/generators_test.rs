use datagen::generator::generators::url::URL_SUFFIXES;
use datagen::{
    generate_date, generate_email, generate_ipv4, generate_ipv6, generate_phone_numbers,
    generate_random_elements, generate_string, generate_url, generate_uuid, random_data_named,
    DataKind, DateRequest, EmailOptions, ErrorKind, GeneratorError, IpKind, Protocol,
    MAX_STRING_LENGTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_url_of_length_fifteen() {
    let mut rng = StdRng::seed_from_u64(42);

    let url = generate_url(&mut rng, 15, Protocol::Http).unwrap();
    let rendered = url.to_string();

    assert_eq!(rendered.len(), 15);
    assert!(rendered.starts_with("http://"));
    assert!(URL_SUFFIXES.iter().any(|s| rendered.ends_with(s)));
}

#[test]
fn test_https_url_lengths() {
    let mut rng = StdRng::seed_from_u64(7);

    for length in 12..60 {
        let url = generate_url(&mut rng, length, Protocol::Https).unwrap();
        assert_eq!(url.to_string().len(), length);
        assert!(url.to_string().starts_with("https://"));
    }

    let err = generate_url(&mut rng, 5, Protocol::Https).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueInvalid);
}

#[test]
fn test_uk_phone_numbers() {
    let mut rng = StdRng::seed_from_u64(42);

    let numbers = generate_phone_numbers(&mut rng, 44, 3, 8).unwrap();
    assert_eq!(numbers.len(), 3);
    for number in &numbers {
        assert_eq!(number.number.len(), 8);
        assert!(number.number.chars().all(|c| c.is_ascii_digit()));
        assert!(number.full_number().starts_with("+44"));
    }
}

#[test]
fn test_string_ceiling() {
    let mut rng = StdRng::seed_from_u64(42);

    let s = generate_string(&mut rng, MAX_STRING_LENGTH).unwrap();
    assert_eq!(s.chars().count(), MAX_STRING_LENGTH);

    assert!(generate_string(&mut rng, 0).unwrap().is_empty());

    assert!(matches!(
        generate_string(&mut rng, MAX_STRING_LENGTH + 1),
        Err(GeneratorError::LengthInvalid(_))
    ));
}

#[test]
fn test_february_rejects_day_29() {
    let mut rng = StdRng::seed_from_u64(42);

    let err = generate_date(&mut rng, &DateRequest::new().month(2).day(29)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateFieldInvalid);
}

#[test]
fn test_explicit_date_fields_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);

    for month in 1..=12 {
        for day in [1, 14, 28] {
            let date = generate_date(&mut rng, &DateRequest::new().month(month).day(day)).unwrap();
            assert_eq!(date.month(), month);
            assert_eq!(date.day(), day);
            assert!(date.hms().is_none());
        }
    }

    let date = generate_date(
        &mut rng,
        &DateRequest::new().year(2024).month(6).day(3).hour(9),
    )
    .unwrap();
    assert_eq!(date.to_string(), "2024-06-03T09:00:00");
}

#[test]
fn test_email_shapes() {
    let mut rng = StdRng::seed_from_u64(42);

    let real = generate_email(&mut rng, &EmailOptions::default());
    assert!(["gmail.com", "outlook.com", "yahoo.com"].contains(&real.domain.as_str()));
    assert_eq!(real.address().matches('@').count(), 1);

    let custom = generate_email(
        &mut rng,
        &EmailOptions::default().random_domain().domain("example.org"),
    );
    assert!(custom.address().ends_with("@example.org"));

    let no_at = generate_email(
        &mut rng,
        &EmailOptions::default().random_domain().domain("mail").without_at(),
    );
    assert!(!no_at.address().contains('@'));
    assert!(no_at.address().ends_with(".mail"));
}

#[test]
fn test_ip_validity_modes() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let v4 = generate_ipv4(&mut rng, true);
        assert_eq!(v4.kind(), IpKind::V4);
        assert!(v4.is_valid());

        let v6 = generate_ipv6(&mut rng, true);
        assert_eq!(v6.kind(), IpKind::V6);
        assert!(v6.is_valid());

        assert!(!generate_ipv6(&mut rng, false).is_valid());
    }
}

#[test]
fn test_uuid_determinism() {
    let mut rng = StdRng::seed_from_u64(42);

    let a = generate_uuid(&mut rng, 5, Some("example.com")).unwrap();
    let b = generate_uuid(&mut rng, 5, Some("example.com")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.get_version_num(), 5);

    let c = generate_uuid(&mut rng, 3, Some("example.com")).unwrap();
    assert_eq!(c, generate_uuid(&mut rng, 3, Some("example.com")).unwrap());
    assert_ne!(a, c);

    let d = generate_uuid(&mut rng, 4, None).unwrap();
    let e = generate_uuid(&mut rng, 4, None).unwrap();
    assert_ne!(d, e);

    let f = generate_uuid(&mut rng, 1, None).unwrap();
    let g = generate_uuid(&mut rng, 1, None).unwrap();
    assert_ne!(f, g);

    assert!(matches!(
        generate_uuid(&mut rng, 2, None),
        Err(GeneratorError::UuidVersionInvalid(2))
    ));
    assert!(matches!(
        generate_uuid(&mut rng, 3, None),
        Err(GeneratorError::UuidNamespaceMissing(3))
    ));
}

#[test]
fn test_random_subset() {
    let mut rng = StdRng::seed_from_u64(42);
    let source = ["a", "b", "c", "d", "e"];

    let picked = generate_random_elements(&mut rng, &source, 3).unwrap();
    assert_eq!(picked.len(), 3);
    assert!(picked.iter().all(|item| source.contains(item)));

    let all = generate_random_elements(&mut rng, &source, source.len()).unwrap();
    let mut sorted = all.into_inner();
    sorted.sort_unstable();
    assert_eq!(sorted, source);

    assert!(generate_random_elements(&mut rng, &source, 6).is_err());
}

#[test]
fn test_dispatch_by_name() {
    let mut rng = StdRng::seed_from_u64(42);

    let value = random_data_named(&mut rng, "URL", 30).unwrap();
    assert_eq!(value.kind(), DataKind::Url);
    assert_eq!(value.to_string().len(), 30);

    let err = random_data_named(&mut rng, "list", 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeUnknown);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (
            generate_string(&mut rng, 20).unwrap(),
            generate_url(&mut rng, 20, Protocol::Http).unwrap(),
            generate_phone_numbers(&mut rng, 1, 2, 10).unwrap(),
        )
    };

    assert_eq!(run(42), run(42));
}
