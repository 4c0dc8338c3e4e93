//! Golden test vectors for the envelope format.
//!
//! Each vector fixes an input and either the exact envelope bytes it must
//! produce or the exact rejection.

use multidigest_core::{decode, encode, validate, CodecError, HashFunctionRef};

/// A golden encode vector.
#[derive(Debug, Clone)]
pub struct EncodeVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Hash function designator.
    pub hashfn: HashFunctionRef,
    /// Digest bytes (hex).
    pub digest: &'static str,
    /// Optional length self-check.
    pub length: Option<usize>,
    /// Expected outcome: envelope hex, or the rejection.
    pub expected: Result<&'static str, CodecError>,
}

/// A golden validation vector.
#[derive(Debug, Clone)]
pub struct ValidateVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Candidate envelope (hex).
    pub envelope: &'static str,
    /// Expected rejection, `None` if well-formed.
    pub expected: Option<CodecError>,
}

/// Get all encode vectors.
pub fn encode_vectors() -> Vec<EncodeVector> {
    vec![
        EncodeVector {
            name: "sha1 by name",
            hashfn: "sha1".into(),
            digest: "0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33",
            length: None,
            expected: Ok("11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33"),
        },
        EncodeVector {
            name: "sha1 by code with length check",
            hashfn: HashFunctionRef::Code(0x11),
            digest: "0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33",
            length: Some(20),
            expected: Ok("11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33"),
        },
        EncodeVector {
            name: "sha2-256",
            hashfn: "sha2-256".into(),
            digest: "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
            length: None,
            expected: Ok(
                "12202c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
            ),
        },
        EncodeVector {
            name: "truncated sha2-256",
            hashfn: "sha2-256".into(),
            digest: "2c26b46b68ffc68f",
            length: None,
            expected: Ok("12082c26b46b68ffc68f"),
        },
        EncodeVector {
            name: "application code",
            hashfn: HashFunctionRef::Code(0x0a),
            digest: "deadbeef",
            length: None,
            expected: Ok("0a04deadbeef"),
        },
        EncodeVector {
            name: "unknown name",
            hashfn: "md5".into(),
            digest: "deadbeef",
            length: None,
            expected: Err(CodecError::UnknownHashName("md5".into())),
        },
        EncodeVector {
            name: "unrecognized code",
            hashfn: HashFunctionRef::Code(0x99),
            digest: "deadbeef",
            length: None,
            expected: Err(CodecError::UnrecognizedCode(0x99)),
        },
        EncodeVector {
            name: "length mismatch",
            hashfn: HashFunctionRef::Code(0x11),
            digest: "deadbeef",
            length: Some(5),
            expected: Err(CodecError::LengthMismatch {
                expected: 5,
                actual: 4,
            }),
        },
        EncodeVector {
            name: "empty digest",
            hashfn: "sha1".into(),
            digest: "",
            length: None,
            expected: Err(CodecError::MissingArguments),
        },
    ]
}

/// Get all validation vectors.
pub fn validate_vectors() -> Vec<ValidateVector> {
    vec![
        ValidateVector {
            name: "well-formed sha1",
            envelope: "11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33",
            expected: None,
        },
        ValidateVector {
            name: "well-formed application code",
            envelope: "0501ff",
            expected: None,
        },
        ValidateVector {
            name: "empty",
            envelope: "",
            expected: Some(CodecError::TooShort(0)),
        },
        ValidateVector {
            name: "zero-length digest",
            envelope: "0500",
            expected: Some(CodecError::TooShort(2)),
        },
        ValidateVector {
            name: "code zero",
            envelope: "0001ff",
            expected: Some(CodecError::UnknownFunctionCode(0x00)),
        },
        ValidateVector {
            name: "first unassigned code above app range",
            envelope: "1001ff",
            expected: Some(CodecError::UnknownFunctionCode(0x10)),
        },
        ValidateVector {
            name: "declared longer than present",
            envelope: "1114ff",
            expected: Some(CodecError::LengthInconsistent {
                declared: 20,
                actual: 1,
            }),
        },
        ValidateVector {
            name: "declared shorter than present",
            envelope: "1201ffff",
            expected: Some(CodecError::LengthInconsistent {
                declared: 1,
                actual: 2,
            }),
        },
    ]
}

/// Check every vector, returning the names of those that disagree.
///
/// Encode vectors that succeed are also decoded and must round-trip.
pub fn failing_vectors() -> Vec<String> {
    let mut failures = Vec::new();

    for v in encode_vectors() {
        let digest = match hex::decode(v.digest) {
            Ok(d) => d,
            Err(_) => {
                failures.push(v.name.to_string());
                continue;
            }
        };
        let got = encode(&digest, v.hashfn.clone(), v.length).map(|mh| mh.to_hex());
        let expected = v.expected.clone().map(str::to_string);
        let roundtrips = match &got {
            Ok(hex) => hex::decode(hex)
                .ok()
                .and_then(|bytes| decode(&bytes).ok())
                .map_or(false, |record| record.digest[..] == digest[..]),
            Err(_) => true,
        };
        if got != expected || !roundtrips {
            failures.push(v.name.to_string());
        }
    }

    for v in validate_vectors() {
        let matches = hex::decode(v.envelope).map_or(false, |bytes| validate(&bytes) == v.expected);
        if !matches {
            failures.push(v.name.to_string());
        }
    }

    failures
}
