use std::sync::Arc;
use super::converter::{Converter,split_comment};
use super::opcodes::OpcodeTable;
use super::{ConversionOptions,LineKind,WorkItem};

const TABLE: &str = r#"{
    "table": {
        "nop": { "oldmnem": "nop", "size": 1 },
        "tax": { "oldmnem": "tax", "size": 1 },
        "inc.a": { "oldmnem": "inc a", "size": 1 },
        "lda.#": { "oldmnem": "lda #?", "size": 2 },
        "lda": { "oldmnem": "lda ?", "size": 3 },
        "lda.l": { "oldmnem": "lda ?", "size": 4 },
        "sta.x": { "oldmnem": "sta ?,x", "size": 3 },
        "jmp.l": { "oldmnem": "jml ?", "size": 4 }
    }
}"#;

fn converter(upper: bool,colon: bool) -> Converter {
    let table = OpcodeTable::from_json(TABLE).expect("bad test table");
    let mut opt = ConversionOptions::new();
    opt.upper_case_opcodes = upper;
    opt.append_colon_to_labels = colon;
    Converter::new(Arc::new(table),opt)
}

fn indent(s: &str) -> String {
    [" ".repeat(16).as_str(),s].concat()
}

fn test_line(conv: &Converter,line: &str,expected: &str,kind: LineKind) {
    let (actual,actual_kind) = conv.convert_line(line);
    assert_eq!(actual,expected);
    assert_eq!(actual_kind,kind);
}

mod passthrough {
    use super::*;
    #[test]
    fn comments() {
        let conv = super::converter(true,true);
        test_line(&conv,"; just a comment","; just a comment",LineKind::Comment);
        test_line(&conv,"        ;   indented","        ;   indented",LineKind::Comment);
        test_line(&conv,";",";",LineKind::Comment);
    }
    #[test]
    fn blanks() {
        let conv = super::converter(true,true);
        test_line(&conv,"","",LineKind::Empty);
        test_line(&conv,"   ","   ",LineKind::Empty);
        test_line(&conv,"\t","\t",LineKind::Empty);
    }
}

mod labels {
    use super::*;
    #[test]
    fn alone() {
        test_line(&converter(false,false),"loop","loop",LineKind::LabelOnly);
        test_line(&converter(false,true),"loop","loop:",LineKind::LabelOnly);
        test_line(&converter(false,true),"loop   ","loop:",LineKind::LabelOnly);
    }
    #[test]
    fn with_comment() {
        test_line(&converter(false,false),"loop ; top","loop ; top",LineKind::LabelPlusComment);
        test_line(&converter(false,true),"loop   ; top","loop:  ; top",LineKind::LabelPlusComment);
    }
    #[test]
    fn with_opcode() {
        let expected = ["loop:"," ".repeat(11).as_str(),"nop"].concat();
        test_line(&converter(false,true),"loop nop",&expected,LineKind::Opcode);
        let expected = ["loop"," ".repeat(12).as_str(),"lda #$ff"].concat();
        test_line(&converter(false,false),"loop   lda.# ff",&expected,LineKind::Opcode);
    }
    #[test]
    fn long_label() {
        test_line(&converter(false,true),"a_very_long_label_indeed tax","a_very_long_label_indeed: tax",LineKind::Opcode);
    }
    #[test]
    fn label_used_as_operand() {
        let expected = ["loop"," ".repeat(12).as_str(),"jml loop"].concat();
        test_line(&converter(false,false),"loop jmp.l loop",&expected,LineKind::Opcode);
    }
    #[test]
    fn with_directive() {
        let expected = ["data"," ".repeat(12).as_str(),".byte 01, 02"].concat();
        test_line(&converter(false,false),"data  .byte 01, 02",&expected,LineKind::Directive);
    }
}

mod opcodes {
    use super::*;
    #[test]
    fn implied() {
        test_line(&converter(false,false),"        tax",&indent("tax"),LineKind::Opcode);
        test_line(&converter(false,false),"        inc.a",&indent("inc a"),LineKind::Opcode);
        test_line(&converter(true,false),"        inc.a",&indent("INC a"),LineKind::Opcode);
    }
    #[test]
    fn operands() {
        let conv = converter(false,false);
        test_line(&conv,"        lda.# 00",&indent("lda #$00"),LineKind::Opcode);
        test_line(&conv,"        lda.# &10",&indent("lda #10"),LineKind::Opcode);
        test_line(&conv,"        lda.# %00001111",&indent("lda #%00001111"),LineKind::Opcode);
        test_line(&conv,"        sta.x 10:00",&indent("sta $1000,x"),LineKind::Opcode);
        test_line(&conv,"        lda.l 00:1000",&indent("lda $001000"),LineKind::Opcode);
        test_line(&conv,"        lda 0x2000",&indent("lda $2000"),LineKind::Opcode);
        test_line(&conv,"        lda tali",&indent("lda tali"),LineKind::Opcode);
    }
    #[test]
    fn upper_case() {
        let conv = converter(true,false);
        test_line(&conv,"        sta.x 1000",&indent("STA $1000,x"),LineKind::Opcode);
        test_line(&conv,"        lda.# ab",&indent("LDA #$ab"),LineKind::Opcode);
    }
    #[test]
    fn trailing_comment() {
        let conv = converter(false,false);
        test_line(&conv,"        nop ; do nothing",&indent("nop ;  do nothing"),LineKind::Opcode);
        test_line(&conv,"        lda.# 01;one",&indent("lda #$01 ; one"),LineKind::Opcode);
    }
    #[test]
    fn missing_operand() {
        let conv = converter(false,false);
        test_line(&conv,"        lda.#","ERROR -->        lda.#",LineKind::Unrecognized);
    }
    #[test]
    fn case_sensitive() {
        let conv = converter(false,false);
        test_line(&conv,"        TAX","ERROR -->        TAX",LineKind::Unrecognized);
    }
}

mod directives {
    use super::*;
    #[test]
    fn passed_through() {
        let conv = converter(false,false);
        test_line(&conv,"        .origin 8000","        .origin 8000",LineKind::Directive);
        test_line(&conv," .mpu 6502"," .mpu 6502",LineKind::Directive);
    }
    #[test]
    fn upper_case_keyword_only() {
        let conv = converter(true,false);
        test_line(&conv,"        .byte 01, aa","        .BYTE 01, aa",LineKind::Directive);
    }
}

mod errors {
    use super::*;
    #[test]
    fn unknown_mnemonic() {
        let conv = converter(false,false);
        test_line(&conv,"        superfrog 00","ERROR -->        superfrog 00",LineKind::Unrecognized);
    }
    #[test]
    fn unknown_mnemonic_with_label() {
        let conv = converter(false,true);
        let expected = ["oops:"," ".repeat(11).as_str(),"ERROR -->   frob"].concat();
        test_line(&conv,"oops   frob",&expected,LineKind::Unrecognized);
    }
    #[test]
    fn line_number_is_kept() {
        let conv = converter(false,false);
        let ans = conv.convert(WorkItem::new(42,"        bogus"));
        assert_eq!(ans.item.line_number,42);
        assert_eq!(ans.kind,LineKind::Unrecognized);
        assert!(ans.item.payload.starts_with("ERROR -->"));
    }
    #[test]
    fn missing_operand_keeps_line_number() {
        let conv = converter(false,false);
        let ans = conv.convert(WorkItem::new(9,"        lda.# ; nothing to load"));
        assert_eq!(ans.item.line_number,9);
        assert_eq!(ans.kind,LineKind::Unrecognized);
    }
}

#[test]
fn comment_splitting() {
    assert_eq!(split_comment("lda.# 00"),("lda.# 00",None));
    assert_eq!(split_comment("lda.# 00 ; x"),("lda.# 00 ",Some(" x")));
    assert_eq!(split_comment("lda.# ';' ; x"),("lda.# ';' ",Some(" x")));
    assert_eq!(split_comment(r#".byte "a;b""#),(r#".byte "a;b""#,None));
    assert_eq!(split_comment("lda.# 'a ; x"),("lda.# 'a ",Some(" x")));
    assert_eq!(split_comment("lda.# 'a;x"),("lda.# 'a",Some("x")));
}

#[test]
fn unclosed_quote_keeps_comment() {
    let conv = converter(false,false);
    test_line(&conv,"        lda.# 'a ; load the letter",&indent("lda #'a ;  load the letter"),LineKind::Opcode);
}
