use ipv4_check::{is_ipv4, is_valid_ipv4, InvalidType};
use serde_json::{json, Value};

#[test]
fn known_addresses()
{
    let cases = [
        ("192.168.1.1", true),
        ("0.0.0.0", true),
        ("255.255.255.255", true),
        ("10.0.0.1", true),
        ("127.0.0.1", true),
        ("1.1.1.1", true),
        ("  192.168.1.1  ", true),
        (" 1.2.3.4", true),
        ("192.168.1", false),
        ("192.168.1.1.1", false),
        ("256.0.0.0", false),
        ("-1.0.0.0", false),
        ("192.168.01.1", false),
        ("192.168..1", false),
        ("abc.def.ghi.jkl", false),
        ("192.168.1.", false),
        (".1.1.1.1", false),
        ("123.456.789.0", false),
        ("1.2.3. 4", false),
        ("", false),
        (" ", false),
    ];

    for (input, expected) in cases
    {
        assert_eq!(is_valid_ipv4(&json!(input)), Ok(expected), "{input:?}");
    }
}

#[test]
fn every_octet_value_round_trips()
{
    for n in 0..=255u16
    {
        let ip = format!("{n}.{n}.{n}.{n}");
        assert!(is_ipv4(&ip), "{ip}");
    }

    assert!(!is_ipv4("256.256.256.256"));
}

#[test]
fn non_strings_fail_loudly()
{
    let inputs: [(Value, &str); 5] = [
        (Value::Null, "null"),
        (json!(123456789), "number"),
        (json!(1.5), "number"),
        (json!(["1.1.1.1"]), "array"),
        (json!({"ip": "1.1.1.1"}), "object"),
    ];

    for (input, kind) in inputs
    {
        assert_eq!(is_valid_ipv4(&input), Err(InvalidType { found: kind }));
    }
}

#[test]
fn callable_from_many_threads()
{
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || is_ipv4(&format!("10.0.0.{i}"))))
        .collect();

    for handle in handles
    {
        assert!(handle.join().unwrap());
    }
}
