use portbf_field::AccessError;
use std::process;
use thiserror::Error;

mod dump;
mod ip;

const SAMPLE_HEADER: [u8; 20] = [
    0x45, 0x00, 0x00, 0x3c, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x06, 0xb1, 0xe6, 0xac, 0x10, 0x0a, 0x63,
    0xac, 0x10, 0x0a, 0x0c,
];

fn main() {
    let mut header = match std::env::args().nth(1) {
        Some(hex) => match parse_hex(&hex) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("invalid header: {}", e);
                process::exit(1);
            }
        },
        None => SAMPLE_HEADER.to_vec(),
    };

    if let Err(e) = ip::IP.validate() {
        eprintln!("bad field table: {}", e);
        process::exit(1);
    }
    if let Err(e) = ip::IP.check_buffer(header.len()) {
        eprintln!("warning: {}", e);
    }

    dump::dump(&ip::IP, &header);

    println!();
    println!("rewriting as version 6, ttl 1");
    if let Err(e) = rewrite(&mut header) {
        eprintln!("{}", e);
        process::exit(1);
    }
    dump::dump(&ip::IP, &header);
}

fn rewrite(header: &mut [u8]) -> Result<(), AccessError> {
    let v6 = ip::IP_VERSION.symbolic_value("V6").unwrap_or(6) as u32;
    ip::IP_VERSION.write_checked(header, v6)?;
    ip::IP_TTL.write_checked(header, 1)?;
    Ok(())
}

#[derive(Debug, Error)]
enum ParseHexError {
    #[error("odd number of hex digits: {0}")]
    OddLength(usize),

    #[error("bad hex byte {0:?}")]
    BadByte(String),
}

fn parse_hex(text: &str) -> Result<Vec<u8>, ParseHexError> {
    let digits: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(ParseHexError::OddLength(digits.len()));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair: String = pair.iter().collect();
            u8::from_str_radix(&pair, 16).map_err(|_| ParseHexError::BadByte(pair))
        })
        .collect()
}
