use bignum::{BigNum, BigNumError, TOTAL_BITS};

fn hex(s: &str) -> BigNum {
    BigNum::from_hex_str(s).unwrap()
}

// ======================================================================
// Hand-picked values
// ======================================================================

#[test]
fn add_0100_0080() {
    let mut c = BigNum::new();
    hex("0100").add(&hex("0080"), &mut c);
    assert_eq!(c, hex("0180"));
}

#[test]
fn div_and_mod_0100_by_0080() {
    let mut c = BigNum::new();
    hex("0100").div(&hex("0080"), &mut c).unwrap();
    assert_eq!(c, hex("02"));
    hex("0100").modulo(&hex("0080"), &mut c).unwrap();
    assert_eq!(c, hex("00"));
}

#[test]
fn pow_2_10() {
    let mut c = BigNum::new();
    BigNum::from_u64(2).pow(&BigNum::from_u64(10), &mut c);
    assert_eq!(c.to_u64(), 1024);
}

#[test]
fn isqrt_5() {
    let mut c = BigNum::new();
    BigNum::from_u64(5).isqrt(&mut c);
    assert_eq!(c.to_u64(), 2);
}

#[test]
fn shift_by_8() {
    let mut c = BigNum::new();
    hex("1").lshift(&mut c, 8);
    assert_eq!(c, hex("100"));
    hex("100").rshift(&mut c, 8);
    assert_eq!(c, hex("1"));
}

#[test]
fn mod_by_zero_is_an_error() {
    let mut c = BigNum::new();
    for a in [BigNum::ZERO, BigNum::ONE, BigNum::MAX] {
        assert_eq!(a.modulo(&BigNum::ZERO, &mut c), Err(BigNumError::DivisionByZero));
    }
}

#[test]
fn shift_by_total_width_is_zero() {
    let mut c = BigNum::new();
    BigNum::MAX.lshift(&mut c, TOTAL_BITS);
    assert!(c.is_zero());
    BigNum::MAX.rshift(&mut c, TOTAL_BITS);
    assert!(c.is_zero());
}

// ======================================================================
// Larger vectors
// ======================================================================

#[test]
fn factorial_100() {
    let mut acc = BigNum::ONE;
    let mut tmp = BigNum::new();
    for i in 2..=100u64 {
        acc.mul(&BigNum::from_u64(i), &mut tmp);
        acc.assign(&tmp);
    }
    assert_eq!(
        acc.to_hex_string(),
        "1b30964ec395dc24069528d54bbda40d16e966ef9a70eb21b5b2943a321cdf10\
         391745570cca9420c6ecb3b72ed2ee8b02ea2735c61a000000000000000000000000"
    );
}

#[test]
fn pow_3_200() {
    let mut c = BigNum::new();
    BigNum::from_u64(3).pow(&BigNum::from_u64(200), &mut c);
    assert_eq!(
        c,
        hex("1fd5863c3eb0469ec21a937a76f3432ffd73d97e447606b683ecf6f6e4a7ae225bfaff1eaaf8b0a1")
    );
}

#[test]
fn isqrt_256_bit() {
    let mut c = BigNum::new();
    hex("deadbeefcafebabe0123456789abcdef00112233445566778899aabbccddeeff").isqrt(&mut c);
    assert_eq!(c, hex("eec23e2566d783aba680ae1e19b3f3fa"));
}

#[test]
fn rsa_511_bit_roundtrip() {
    let n = hex(
        "7d2be5742569abe235b6d2bdab82b610f5862282b9a1a75aac22f672cbf97c33\
         9a4af34718beb80c25953e352fe1e2db9283de56df4a1a7290c7f4e82761d45b",
    );
    let d = hex(
        "26f20c7f79d08a2964fb1050f157471cb9b7d56f0520f5f8314ce38f4e45becd\
         c3af6fea95dfca232e980ff56034caa50f8632f74af8a80a989b970498e416c1",
    );
    let e = BigNum::from_u64(65537);
    let m = hex("48656c6c6f2c20626967206e756d6265727321");
    let expected_c = hex(
        "6ff28ab80049b606dbff56dba1408719869001e607d3ebc726258186df859ade\
         8de6421b58c068abacd8c9cc7525bef1b6f57d750822324095a3e0af034fbb2",
    );

    let mut c = BigNum::new();
    m.pow_mod(&e, &n, &mut c).unwrap();
    assert_eq!(c, expected_c);

    let mut back = BigNum::new();
    c.pow_mod(&d, &n, &mut back).unwrap();
    assert_eq!(back, m);
}

#[test]
fn sources_are_untouched() {
    let a = hex("123456789abcdef0fedcba9876543210");
    let b = hex("fedcba98");
    let (a_before, b_before) = (a, b);
    let (mut q, mut r) = (BigNum::new(), BigNum::new());
    a.divmod(&b, &mut q, &mut r).unwrap();
    a.pow(&b, &mut q);
    a.isqrt(&mut r);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
