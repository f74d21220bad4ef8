use yomu_core::{Extractor, Glossary, Importer, RawEntry, Term};

use crate::daijisen::DaijisenExtractor;

fn extract(heading: &str, text: &str) -> Vec<Term> {
    let extractor = DaijisenExtractor::new().unwrap();
    extractor.extract_terms(&RawEntry::new(heading, text), 7)
}

fn forms(terms: &[Term]) -> Vec<(&str, &str)> {
    terms
        .iter()
        .map(|t| (t.expression(), t.reading()))
        .collect()
}

fn rules(term: &Term) -> Vec<&str> {
    term.rules().iter().map(String::as_str).collect()
}

#[test]
fn plain_heading_yields_one_term() {
    let terms = extract("あい【愛】", "あい【愛】\n１ かわいがり大切にすること。");
    assert_eq!(forms(&terms), vec![("愛", "あい")]);

    let term = &terms[0];
    assert_eq!(term.sequence(), 7);
    assert_eq!(
        term.glossary(),
        &[Glossary::Text("あい【愛】\n１ かわいがり大切にすること。".to_string())]
    );
    assert!(term.tags().is_empty());
}

#[test]
fn kana_heading_has_no_reading() {
    let terms = extract("あいまい", "あいまい\n［形動］");
    assert_eq!(forms(&terms), vec![("あいまい", "")]);
}

#[test]
fn variants_keep_split_order() {
    let terms = extract("あ【愛・哀】", "");
    assert_eq!(forms(&terms), vec![("愛", "あ"), ("哀", "あ")]);
}

#[test]
fn optional_infix_inlined_before_removed() {
    let terms = extract("あ【愛（しい）】", "");
    assert_eq!(forms(&terms), vec![("愛しい", "あ"), ("愛", "あ")]);
}

#[test]
fn reading_notes_dropped_while_expression_options_expand() {
    // Parentheses mean different things on each side of the bracket
    let terms = extract("おく‐る（おくる）【送（る）】", "");
    assert_eq!(forms(&terms), vec![("送る", "おくる"), ("送", "おくる")]);
}

#[test]
fn empty_parenthetical_yields_one_term() {
    let terms = extract("あ【（）】", "def");
    assert_eq!(forms(&terms), vec![("あ", "")]);
    assert_eq!(terms[0].glossary(), &[Glossary::from("def")]);
}

#[test]
fn unparsable_heading_yields_nothing() {
    assert!(extract("", "orphan body").is_empty());
}

#[test]
fn tags_come_from_first_group_of_each_line() {
    let extractor = DaijisenExtractor::new().unwrap();
    let tags = extractor.tags("［名・形動］［文］ナリ\n本文\n［形］［文］く・し［シク］");
    assert_eq!(tags, vec!["名", "形動", "形"]);
    assert!(extractor.tags("no annotations here").is_empty());
}

#[test]
fn adjective_rule() {
    let terms = extract("うつくしい【美しい】", "［形］［文］うつく・し［シク］");
    assert_eq!(rules(&terms[0]), vec!["adj-i"]);
}

#[test]
fn suru_rule_requires_verbal_suffix() {
    let terms = extract("あいする【愛する】", "［動サ変］［文］あい・す［サ変］");
    assert_eq!(rules(&terms[0]), vec!["vs"]);

    let terms = extract("あいする【愛為る】", "［動サ変］");
    assert_eq!(rules(&terms[0]), vec!["vs"]);

    let terms = extract("べんきょう【勉強】", "［動サ変］");
    assert!(terms[0].rules().is_empty());
}

#[test]
fn suru_rule_checked_per_variant() {
    let terms = extract("あいする【愛する・愛】", "［動サ変］");
    assert_eq!(rules(&terms[0]), vec!["vs"]);
    assert!(terms[1].rules().is_empty());
}

#[test]
fn kuru_is_special_cased() {
    let terms = extract("くる【来る】", "［動カ変］［文］く［カ変］");
    assert_eq!(rules(&terms[0]), vec!["vk"]);

    // Needs at least one annotation to fire
    let terms = extract("くる【来る】", "no annotations");
    assert!(terms[0].rules().is_empty());
}

#[test]
fn godan_and_ichidan_rules() {
    let terms = extract("かく【書く】", "［動カ五（四）］");
    assert_eq!(rules(&terms[0]), vec!["v5"]);

    let terms = extract("たべる【食べる】", "［動バ下一］［文］た・ぶ［バ下二］");
    assert_eq!(rules(&terms[0]), vec!["v1"]);
}

#[test]
fn rules_from_several_lines_accumulate() {
    let terms = extract("ある【或る】", "［動ラ五（四）］\n［形］");
    assert_eq!(rules(&terms[0]), vec!["adj-i", "v5"]);
}

#[test]
fn unknown_codes_are_ignored() {
    let terms = extract("ねこ【猫】", "［名］\n［接尾］");
    assert!(terms[0].rules().is_empty());
}

#[test]
fn ships_glyph_tables() {
    let extractor = DaijisenExtractor::new().unwrap();
    let glyphs = extractor.glyph_tables();

    assert_eq!(glyphs.narrow.len(), 251);
    assert_eq!(glyphs.wide.len(), 1442);
    assert_eq!(glyphs.narrow.substitute(0xa121), Some("\u{a0}"));
    assert_eq!(glyphs.wide.substitute(0xb021), Some("嗩"));
    assert_eq!(glyphs.wide.substitute(0xb322), Some("\n㋘"));
    // Icon markers map to nothing
    for code in [0xc463, 0xc464, 0xc465, 0xc466] {
        assert_eq!(glyphs.wide.substitute(code), Some(""));
        assert!(glyphs.wide.get(code).is_some_and(|g| g.note.is_some()));
    }
    assert_eq!(extractor.revision(), "daijisen2");
}

#[test]
fn import_merges_duplicate_headwords() {
    let extractor = DaijisenExtractor::new().unwrap();
    let entries = vec![
        RawEntry::new("あい【愛】", "def1"),
        RawEntry::new("", "skipped"),
        RawEntry::new("あい【哀】", "def2"),
        RawEntry::new("あい【愛】", "def3"),
    ];

    let output = Importer::new(&extractor).run(&entries);

    assert_eq!(output.skipped, 1);
    assert_eq!(forms(&output.terms), vec![("愛", "あい"), ("哀", "あい")]);
    assert_eq!(
        output.terms[0].glossary(),
        &[Glossary::from("def1"), Glossary::from("def3")]
    );
    assert_eq!(output.terms[0].sequence(), 0);
    assert_eq!(output.terms[1].sequence(), 2);
    assert!(output.kanji.is_empty());
}
