use lltypes::fields::{INTEGER_FIELDS, IntWidth, Signedness, fixed_string, integer_field};
use lltypes::{ByteOrder, Endianness, FormatTable, LayoutTarget, NumericKind, Type};

#[test]
fn every_integer_constructor_compiles_to_its_width() {
    // the whole constructor family resolves against the standard table
    let target = LayoutTarget::host();
    for entry in INTEGER_FIELDS {
        let layout = (entry.ctor)("n").to_native_layout(&target).expect("standard codes compile");
        let scalar = layout.as_scalar().expect("fields compile to scalars");
        assert_eq!(scalar.repr.byte_width, entry.width.bytes());
        assert_eq!(scalar.byte_order, entry.endianness.resolve());
    }
}

#[test]
fn fixed_string_round_trips_through_element_descriptor() {
    let Type::Sequence(text) = fixed_string("name", 5) else {
        panic!("fixed strings are sequences");
    };
    assert_eq!(text.length, 5);
    let element = text
        .element()
        .to_element_descriptor(&FormatTable::standard())
        .expect("character cells map to elements");
    assert_eq!(element.item_size(), 1);
    assert_eq!(element.kind(), NumericKind::Signed);
    assert_eq!(element.byte_order, ByteOrder::Little);
}

#[test]
fn integer_field_lookup_covers_all_triples() {
    for signedness in [Signedness::Unsigned, Signedness::Signed] {
        for width in [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64] {
            for endianness in Endianness::ALL {
                assert!(
                    integer_field("n", signedness, width, endianness).is_some(),
                    "missing constructor for {signedness:?} {width:?} {endianness}"
                );
            }
        }
    }
}
