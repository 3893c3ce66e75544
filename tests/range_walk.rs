//! End-to-end walks over the public API, including the full 512-address
//! sweep and visitors built on `anyhow`.

use std::net::Ipv4Addr;

use anyhow::anyhow;
use ipwalk::{WalkError, validate_range, walk_range};

#[test]
fn sweep_of_512_addresses_is_ascending_and_complete() {
    let mut seen = Vec::new();
    walk_range("0.0.0.0", "0.0.1.255", |addr| {
        seen.push(addr);
        Ok(())
    })
    .unwrap();

    assert_eq!(seen.len(), 512);
    assert_eq!(seen.first(), Some(&Ipv4Addr::new(0, 0, 0, 0)));
    assert_eq!(seen.last(), Some(&Ipv4Addr::new(0, 0, 1, 255)));
    assert!(
        seen.windows(2)
            .all(|w| u32::from(w[1]) == u32::from(w[0]) + 1)
    );
}

#[test]
fn visit_count_is_end_minus_start_plus_one() {
    let start = Ipv4Addr::new(10, 1, 2, 250);
    let end = Ipv4Addr::new(10, 1, 3, 20);

    let mut count: u64 = 0;
    walk_range(&start.to_string(), &end.to_string(), |_| {
        count += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(count, u64::from(u32::from(end)) - u64::from(u32::from(start)) + 1);
}

#[test]
fn anyhow_visitor_errors_carry_their_message() {
    let err = walk_range("0.0.0.0", "0.0.1.0", |addr| {
        if addr == Ipv4Addr::new(0, 0, 0, 3) {
            return Err(anyhow!("host {addr} refused").into());
        }
        Ok(())
    })
    .unwrap_err();

    match err {
        WalkError::Visitor { addr, source } => {
            assert_eq!(addr, Ipv4Addr::new(0, 0, 0, 3));
            assert!(source.to_string().contains("refused"));
        }
        other => panic!("expected visitor error, got {other:?}"),
    }
}

#[test]
fn parse_errors_expose_their_cause() {
    use std::error::Error as _;

    let err = validate_range("0.0.0.0", "0.0.1111.0").unwrap_err();
    assert!(matches!(err, WalkError::End { .. }));

    let cause = err.source().expect("parse failure carries a cause");
    assert!(cause.to_string().contains("1111"));
}
