use smartci_lsp::naming::{capitalize_first, convention_file_name};

#[test]
fn test_identifier_without_underscores_is_capitalized() {
    for id in ["user", "banner", "x", "Already", "a1"] {
        assert_eq!(
            convention_file_name(id),
            format!("{}.php", capitalize_first(id)),
            "identifier {id}"
        );
    }
}

#[test]
fn test_every_segment_is_capitalized() {
    assert_eq!(
        convention_file_name("layer_banner_model"),
        "Layer_Banner_Model.php"
    );
    assert_eq!(convention_file_name("user_model"), "User_Model.php");
}

#[test]
fn test_rest_of_segment_keeps_its_case() {
    assert_eq!(convention_file_name("myHTML_parser"), "MyHTML_Parser.php");
}

#[test]
fn test_empty_and_degenerate_identifiers() {
    assert_eq!(convention_file_name(""), ".php");
    assert_eq!(convention_file_name("__"), "__.php");
    assert_eq!(convention_file_name("_model"), "_Model.php");
}

#[test]
fn test_capitalize_first_leaves_tail_alone() {
    assert_eq!(capitalize_first("ebei_model"), "Ebei_model");
    assert_eq!(capitalize_first(""), "");
    assert_eq!(capitalize_first("élan"), "Élan");
}
