//! Literal byte tables for the AES-GCM vectors.
//!
//! Keys were randomly generated once and are fixed. Ciphertexts and tags were
//! produced by an independent AES-GCM implementation (Python `cryptography`).

use hex_literal::hex;

use crate::vectors::case::KeySize;

/// ASCII text of the Web Cryptography API abstract, shared by every case.
pub const PLAINTEXT: [u8; 479] = *b"This specification describes a JavaScript API for performing basic cryptographic \
    operations in web applications, such as hashing, signature generation and \
    verification, and encryption and decryption. Additionally, it describes an API \
    for applications to generate and/or manage the keying material necessary to \
    perform these operations. Uses for this API range from user or service \
    authentication, document or code signing, and the confidentiality and integrity \
    of communications.";

/// 256-bit IV. GCM hashes any IV that is not 96 bits long into the initial counter block.
pub const IV: [u8; 32] = hex!("3a92732aa6ea39bf3986e0c73fa92000202175385ef8adeac2c87335eb928dd4");

/// ASCII editorial note following the abstract of the Web Cryptography API.
pub const ADDITIONAL_DATA: [u8; 52] = *b"There are 7 further editorial notes in the document.";

pub const KEY_128: [u8; 16] = hex!("dec0d4fcbf3c4741c892dabd1cd4c04e");
pub const KEY_192: [u8; 24] = hex!("d0ee83413f44c43fbad03dcfa61263981d6ddd5ff01e1cf6");
pub const KEY_256: [u8; 32] = hex!("67693823fb1d58073f91ece9cc3af910e5532616a4d27b13eb7b74d8000bbf30");

// full 128-bit tags, computed with ADDITIONAL_DATA
pub const TAG_128: [u8; 16] = hex!("c2e2c6fdef1cc5f07bd8b097efc8b8b7");
pub const TAG_192: [u8; 16] = hex!("b7392090a44c794d3a563e84358260e1");
pub const TAG_256: [u8; 16] = hex!("bceff1309f15d500f12a554cc21c313c");

// full 128-bit tags, computed with no additional data
pub const TAG_EMPTY_AD_128: [u8; 16] = hex!("de330b1724defaf81b621e519623dcc6");
pub const TAG_EMPTY_AD_192: [u8; 16] = hex!("f30b8270a9ef72eeb9db5d015f6cb8b7");
pub const TAG_EMPTY_AD_256: [u8; 16] = hex!("f4ba56cb9a25bff8f6398b82e02fd9ee");

pub const CIPHERTEXT_128: [u8; 479] = hex!(
    "b4f128b7693493eee0afafeca8f4f17909cae1ed38d8fdfeba666fcfe4be82b1"
    "9ff60635f971e4fe517efdbf642bfb936b5ba6e7c9f1b4d6702f7ba4ba863641"
    "16b5c952ec3b348bac2729597b3e66a75296fa5d60a98759f5ffa4c0a99f1910"
    "8b914c04908394c5cc2e176ec1e47f78f21836f0b5a262f4f944867a7e97266c"
    "7444966d26c2159f8ccdb7236197ba789116eb16d2dfbb8fa2b75dc468336035"
    "eafab84ced9d25cbe257de4bf05fdade4051a54bc9d8be0d74d945422fa144f7"
    "4afd9db5a27935205b7ce669e011bb323d4d674f4739a374ea951b69181f9f03"
    "80822a5e7dc88efb94c91195e854321112cbbae2a4e3ca4c4110a3e084341f65"
    "8148ab9f2ab1fd6256c95f753e0ccd4e247ec47959b925a142b575ba477c846e"
    "781bf6a3120d5ac87f52d1f1aa49f78960f4fefb77479c1b6b35212d16009030"
    "200b74157df6d9ab9ee08eea8df2a8599a42e3a1b66001584e0c07ef1ece1f59"
    "6f6b2a25f194e80108fb7592b70930275e3b46e61aa5619c8c8d1f3e0ace3730"
    "cf00c5cac56c85af5004109adfff04c4bcb2f01d0d7805e1ca0323e19e5c9849"
    "cd6b9de0f563c2ab9cf5f7b7a5283ec86e1d97ce64af5824f25a045249fa8cf5"
    "d9099923f2ce4ec579730f508065bff05b97f93e3ef412031187ded25d957b"
);

pub const CIPHERTEXT_192: [u8; 479] = hex!(
    "7ea0a670e3d46abaaf46181c56951f9a9cbef4842c3d95f269431188079299aa"
    "c8d68ecdaae1552cf19fffea0a0d2530ff158db03c754982f7cc9066a759cbeb"
    "e5817afd7cb37376a39d438d7a92d10b7005e6757bb8f363530a1fa66001792c"
    "0af1182bb8bb19eff6b06ce67f192a43ca8cb3689f4b672bf862a6b34300a3e3"
    "542881e3c6cd079c10b918a63bdac5724a227e16e2e255d44553a3b9446db636"
    "d1ed60b820357faf0d928d73a4b862f5aedf2e20a7276713d25083fe67f9f71d"
    "781f69f167a9f95d994a3835ef9d84eca9f6f218716180ee98941f54083469c6"
    "74678430c7175a181d3f2975bf391fd1803c77af548db1a5a9c323a369929dd1"
    "5d9569a05de74ec95cebc8592532b51ed5f23b9cdb139e11e0516c3457f86517"
    "276b439767e67ecab876e2121d5d25d0285271239d919832fd8c2f8dc0019472"
    "280a704fe31069f71f3166c34bb7acfebc2a594d266801b46a3d474623a06765"
    "f41ae2259f9b046bdedb882518f62c172cf8846c3bb36391845235cb6f96377b"
    "33d6a56c7cb383ae8be07260dab5f380c662735c5fa517e56c920ef4a22555c9"
    "212c5c6a70b910bd2a726d3b7c8310d31f611d873d964bfacf8126cdbbba37cf"
    "e81830e831e2100c1b461f7c80da645bc8b84efc64eb3e2b45d6a3410e2cb4"
);

pub const CIPHERTEXT_256: [u8; 479] = hex!(
    "0861eb7146208783d2d17ca0ffb6091d7dc11bf0812e0289a98e3d079136aacf"
    "9f6f275f573fa21b0612dbd774225a3972f4669143063398f7a5f27464dbb148"
    "b1116e435ddb64d914cf599a2d25695343a28ceb8128b1caae3694379cc1e8f9"
    "86a3c33372744126496360f9e0451177babcb52b4e9c4c8ae23f05f8095e1a01"
    "02eb27ae4a2fb716282f2f0d64770c43b2b838a7ee8f0d2cd0b9976c0611347a"
    "b6d2cf2adb254a5e7e24f9252004da2cee4538db1f4dad2ebb672470d5fc2857"
    "a4f0a39f20817db26c2f1c1f242a73240e91c39cbf2ea3f9b51f5a491e4839df"
    "3f3c4f8c0e751f91de9c79ed20918f600cfe2315153ba8ab9ad9003bcaaf67d6"
    "c0af1a122b36b0de4b16077afde0913d2ad049ed548dd1d5e42ef43b09440623"
    "58bd0a3e09551c2c521399a0b2f038a0f4c9ad4d3d14e31eb4a71069b9c15fcf"
    "2917864ec6b65d1859f7e74be9c289f272c2be828aee5e89c1c27389becfa953"
    "9b0ed2a081c3a1eaddff7243620c5d2941b7f467f76552f67d577d4e15ba66cd"
    "142820c9ae0f34f0d9b4a26c06d3291287e8b812bca99dbe4ca64bb07f27fb16"
    "cb995031f17c89977bcc2b9fbeb1c41275a92e98fb2d19a41b91d6e4370f0283"
    "d850ffccaf643b910f6728212dffc8feac8a143a57b6c094db2958e6e546f9"
);

/// Raw key bytes for `size`.
pub fn key(size: KeySize) -> &'static [u8] {
    match size {
        KeySize::Bits128 => &KEY_128,
        KeySize::Bits192 => &KEY_192,
        KeySize::Bits256 => &KEY_256,
    }
}

/// Full tag over `PLAINTEXT` with `ADDITIONAL_DATA`.
pub fn tag(size: KeySize) -> &'static [u8; 16] {
    match size {
        KeySize::Bits128 => &TAG_128,
        KeySize::Bits192 => &TAG_192,
        KeySize::Bits256 => &TAG_256,
    }
}

/// Full tag over `PLAINTEXT` with absent (equivalently, empty) additional data.
pub fn tag_with_empty_ad(size: KeySize) -> &'static [u8; 16] {
    match size {
        KeySize::Bits128 => &TAG_EMPTY_AD_128,
        KeySize::Bits192 => &TAG_EMPTY_AD_192,
        KeySize::Bits256 => &TAG_EMPTY_AD_256,
    }
}

/// Ciphertext of `PLAINTEXT` under `key(size)` and `IV`. Identical with or without AAD.
pub fn ciphertext(size: KeySize) -> &'static [u8] {
    match size {
        KeySize::Bits128 => &CIPHERTEXT_128,
        KeySize::Bits192 => &CIPHERTEXT_192,
        KeySize::Bits256 => &CIPHERTEXT_256,
    }
}
