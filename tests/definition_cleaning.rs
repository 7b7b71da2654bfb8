use vi2zh_dict::clean_definition;

fn assert_no_separator_artifacts(cleaned: &str) {
    assert!(!cleaned.contains(";;"), "double semicolon in {:?}", cleaned);
    assert!(!cleaned.starts_with(';'), "leading semicolon in {:?}", cleaned);
    assert!(!cleaned.ends_with(';'), "trailing semicolon in {:?}", cleaned);
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(clean_definition(""), "");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(clean_definition("con mèo"), "con mèo");
}

#[test]
fn category_tags_are_removed_in_both_scripts() {
    let cases = [
        ("mèo [Category:Vietnamese]]", "mèo"),
        ("mèo[Category:Danh từ]", "mèo"),
        ("mèo [分類:越南語]]]", "mèo"),
        ("[Category:A]][分類:B]mèo", "mèo"),
    ];
    for (input, expected) in cases {
        let cleaned = clean_definition(input);
        assert_eq!(cleaned, expected, "input {:?}", input);
        assert!(!cleaned.contains("[Category"));
        assert!(!cleaned.contains(']'));
    }
}

#[test]
fn category_only_definition_cleans_to_empty() {
    assert_eq!(clean_definition("[Category:X]]"), "");
    assert_eq!(clean_definition("[分類:X]"), "");
}

#[test]
fn wiki_links_are_unwrapped() {
    let cleaned = clean_definition("see [[abc]] also");
    assert_eq!(cleaned, "see abc also");
    assert!(!cleaned.contains("[["));
    assert!(!cleaned.contains("]]"));
}

#[test]
fn hanzi_indicator_is_removed() {
    assert_eq!(clean_definition("[hy:漢字]nước"), "nước");
}

#[test]
fn word_class_stops_at_break_tag_or_semicolon() {
    assert_eq!(clean_definition("词类: danh từ<br />con chó"), "con chó");
    assert_eq!(clean_definition("词类:động từ; chạy"), "chạy");
}

#[test]
fn etymology_runs_to_end_of_line() {
    assert_eq!(clean_definition("con chó 词源: từ Hán; cổ"), "con chó");
    assert_eq!(clean_definition("词源: Hán Việt\ncon chó"), "con chó");
}

#[test]
fn character_labels_are_removed_keeping_following_text() {
    assert_eq!(clean_definition("字: 水"), "水");
    assert_eq!(clean_definition("漢字: 水"), "水");
    assert_eq!(clean_definition("字喃:  𣷭"), "𣷭");
}

#[test]
fn double_colon_bullets_are_removed() {
    assert_eq!(clean_definition("::nghĩa một<br />::nghĩa hai"), "nghĩa một; nghĩa hai");
}

#[test]
fn break_tags_split_senses_in_any_spelling() {
    assert_eq!(clean_definition("a<br>b<BR/>c<Br  />d"), "a; b; c; d");
}

#[test]
fn filler_senses_are_dropped() {
    assert_eq!(clean_definition("one<br />---<br />two"), "one; two");
    assert_eq!(clean_definition("one<br />-<br /> <br />two"), "one; two");
    assert_eq!(clean_definition("one<br />br<br />two"), "one; two");
}

#[test]
fn numbering_is_stripped_from_senses() {
    assert_eq!(
        clean_definition("1. nghĩa một<br />2. nghĩa hai<br />10.nghĩa mười"),
        "nghĩa một; nghĩa hai; nghĩa mười"
    );
}

#[test]
fn self_closing_residue_is_stripped() {
    assert_eq!(clean_definition("/> 2. nghĩa hai"), "nghĩa hai");
    assert_eq!(clean_definition("nghĩa/> một"), "nghĩamột");
    assert_eq!(clean_definition("one<br />br /><br />two"), "one; two");
}

#[test]
fn stray_brackets_are_stripped() {
    assert_eq!(clean_definition("] nghĩa một ]"), "nghĩa một");
    assert_eq!(clean_definition("a]b<br />]"), "ab");
}

#[test]
fn whitespace_is_collapsed() {
    assert_eq!(clean_definition("con\t\tmèo \n  đen"), "con mèo đen");
}

#[test]
fn repeated_and_edge_semicolons_are_collapsed() {
    assert_eq!(clean_definition("a;; b"), "a; b");
    assert_eq!(clean_definition("a; ;;b"), "a;b");
    assert_eq!(clean_definition(";a;"), "a");
}

#[test]
fn mixed_markup_definition() {
    let raw = "[hy:漢字]字: 水<br />1. [[nước]]; [[sông]]<br />2. ::thủy]]<br />---\
               [Category:Vietnamese]]<br />词类: danh từ";
    assert_eq!(clean_definition(raw), "水; nước; sông; thủy");
}

#[test]
fn output_never_has_separator_artifacts() {
    let inputs = [
        ";;;",
        "; <br /> ;",
        "a<br />;<br />b",
        "<br /><br />x<br /><br />",
        ";a;;;b;",
        "a;<br />;b",
        "]];[[x]];;",
    ];
    for input in inputs {
        assert_no_separator_artifacts(&clean_definition(input));
    }
}

#[test]
fn markup_only_or_noise_inputs_clean_to_empty() {
    for input in ["<br />", "---", "]]]", "br", ";", "<br />-<br />br />"] {
        assert_eq!(clean_definition(input), "", "input {:?}", input);
    }
}

#[test]
fn cleaning_is_idempotent_on_clean_text() {
    let inputs = [
        "con mèo",
        "nghĩa một; nghĩa hai",
        "  a   b  ",
        "x;; y",
        "水, nước",
    ];
    for input in inputs {
        let once = clean_definition(input);
        assert_eq!(clean_definition(&once), once, "input {:?}", input);
    }
}
