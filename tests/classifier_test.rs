use classify::{Classification, Client, ClientInfo, Label, Library, MemorySource, Sanitizer};
use std::sync::Arc;
use std::thread;

fn alcohol_training() -> MemorySource {
    MemorySource::new([
        ("prost beer 100ml", "1"),
        ("Bir Bintang Pilsener 620ml", "1"),
        ("Anggur Merah Orang Tua 620ml", "1"),
        ("Vodka Absolut 700ml", "1"),
        ("jaket hoodie sweater", "-1"),
        ("Kaos Polos Cotton Combed", "-1"),
        ("Sepatu Sneakers Pria", "-1"),
        ("Teh Botol Sosro 450ml", "-1"),
    ])
}

fn alcohol_library() -> MemorySource {
    MemorySource::new([
        ("beer", "beer"),
        ("bir", "beer"),
        ("anggur", "wine"),
        ("prost", "-"),
        ("ml", "-"),
    ])
}

fn setup_test_client() -> Client {
    let mut client = Client::new("alcohol", "naive-bayes-tfidf");
    client
        .init(&alcohol_training(), &alcohol_library())
        .expect("Failed to initialize client");
    client
}

#[test]
fn test_end_to_end_classification() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::builder()
        .with_client_id("example")
        .with_method("naive-bayes-tfidf")
        .add_example("prost beer 100ml", Label::Positive)
        .add_example("jaket hoodie sweater", Label::Negative)
        .add_library_entry("beer", "beer")
        .add_library_entry("prost", "-")
        .build()?;

    let sanitizer = Sanitizer::new(Library::from_pairs([("beer", "beer"), ("prost", "-")]));
    // digits split words, so "100ml" leaves "ml" behind
    assert_eq!(sanitizer.sanitize_one("prost beer 100ml"), vec!["beer", "ml"]);

    let result = client.classify("prost beer 100ml");
    assert!(result.verdict);
    assert!(result.score > 0.99);
    Ok(())
}

#[test]
fn test_negative_classification() {
    let client = setup_test_client();
    let result = client.classify("Hoodie Sweater Polos");
    assert!(!result.verdict);
    assert!(result.score > 0.5);
}

#[test]
fn test_library_variants_share_vocabulary() {
    let client = setup_test_client();
    // "bir" was only ever seen through the library as "beer"
    let via_variant = client.classify("BIR dingin");
    let via_canonical = client.classify("beer dingin");
    assert_eq!(via_variant, via_canonical);
    assert!(via_variant.verdict);
}

#[test]
fn test_degenerate_inputs() {
    let client = setup_test_client();
    assert_eq!(client.classify(""), Classification::EMPTY);
    assert_eq!(client.classify("   !!! 620 ... "), Classification::EMPTY);
    assert_eq!(client.classify("prost ML 100ml a"), Classification::EMPTY);
}

#[test]
fn test_scores_are_probabilities() {
    let client = setup_test_client();
    for text in ["Vodka", "Sepatu pria", "unknown words only", "wine sneakers"] {
        let result = client.classify(text);
        assert!(result.score >= 0.5 && result.score <= 1.0, "{}: {:?}", text, result);
    }
}

#[test]
fn test_client_info() {
    let client = setup_test_client();
    let ClientInfo {
        client_id,
        library_size,
        positive_examples,
        negative_examples,
        ..
    } = client.info().expect("client should be ready");
    assert_eq!(client_id, "alcohol");
    assert_eq!(library_size, 5);
    assert_eq!(positive_examples, 4);
    assert_eq!(negative_examples, 4);
}

#[test]
fn test_thread_safety() {
    let client = Arc::new(setup_test_client());
    let expected = client.classify("anggur merah");
    let mut handles = vec![];

    for _ in 0..4 {
        let client = Arc::clone(&client);
        let handle = thread::spawn(move || client.classify("anggur merah"));
        handles.push(handle);
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_client_can_move_between_threads() {
    let client = setup_test_client();
    let result = thread::spawn(move || client.classify("vodka absolut"))
        .join()
        .unwrap();
    assert!(result.verdict);
}
