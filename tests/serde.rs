// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use serde_test::{assert_tokens, Token};

use bigdec::Decimal;

#[test]
fn test_serde() {
    let d: Decimal = "-12.34".parse().unwrap();

    assert_tokens(
        &d,
        &[
            Token::Struct {
                name: "Decimal",
                len: 3,
            },
            Token::Str("digits"),
            Token::Str("1234"),
            Token::Str("exponent"),
            Token::I64(-2),
            Token::Str("negative"),
            Token::Bool(true),
            Token::StructEnd,
        ],
    );

    let d: Decimal = "6.22e23".parse().unwrap();

    assert_tokens(
        &d,
        &[
            Token::Struct {
                name: "Decimal",
                len: 3,
            },
            Token::Str("digits"),
            Token::Str("622"),
            Token::Str("exponent"),
            Token::I64(21),
            Token::Str("negative"),
            Token::Bool(false),
            Token::StructEnd,
        ],
    );

    for (json, err) in vec![
        (
            json!(1i32),
            "invalid type: integer `1`, expected struct Decimal",
        ),
        (
            json!("-1"),
            "invalid type: string \"-1\", expected struct Decimal",
        ),
    ] {
        assert_eq!(
            serde_json::from_value::<Decimal>(json)
                .unwrap_err()
                .to_string(),
            err
        );
    }
}

#[test]
fn test_serde_json_round_trip() {
    for input in &["0", "-25000", "0.500", "-5.000067", "1e-10"] {
        let d: Decimal = input.parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let r: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(r.coefficient(), d.coefficient(), "input {:?}", input);
        assert_eq!(r.exponent(), d.exponent(), "input {:?}", input);
        assert_eq!(r.is_signed(), d.is_signed(), "input {:?}", input);
    }
}
