use portbf_field::{BitfieldDescriptor, FieldDescriptor};

pub fn dump(desc: &BitfieldDescriptor, buf: &[u8]) {
    println!("{} ({} bytes)", desc.name, buf.len());

    let mut current_word = None;
    for field in desc.fields {
        if current_word != Some(field.index()) {
            current_word = Some(field.index());
            dump_word(field, buf);
        }
        print!("    {:<10} ", field.name());
        dump_field(field, buf);
        println!();
    }
}

fn dump_word(field: &FieldDescriptor, buf: &[u8]) {
    match field.load(buf) {
        Ok(word) => println!(
            "  word {} ({}{}): 0x{:0width$x}",
            field.index().0,
            field.width(),
            field.byte_order(),
            word,
            width = 2 * field.width().bytes(),
        ),
        Err(e) => println!("  word {}: {}", field.index().0, e),
    }
}

fn dump_field(field: &FieldDescriptor, buf: &[u8]) {
    match field.read(buf) {
        Ok(value) => match field.symbol(value) {
            Some(symbol) => print!("{} ({})", value, symbol),
            None if field.bit_width() == 1 => print!("{}", value != 0),
            None => print!("{} (0x{:x})", value, value),
        },
        Err(e) => print!("{}", e),
    }
}
