/*++

Licensed under the Apache-2.0 license.

File Name:

   codegen.rs

Abstract:

    File contains the C source/header text generation for the RSA key
    material arrays.

--*/

use crate::keys::KeyMaterial;

const INCLUDE_GUARD: &str = "RSA_KEYS_H";

/// Render a byte sequence as a C array definition, 16 bytes per line.
///
/// A zero-length input still yields a valid (empty-body) definition.
pub fn render_c_array(name: &str, bytes: &[u8]) -> String {
    let mut out = format!("const uint8_t {}[{}] = {{\n", name, bytes.len());
    let lines: Vec<String> = bytes
        .chunks(16)
        .map(|chunk| {
            let entries: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("    {}", entries.join(", "))
        })
        .collect();
    if !lines.is_empty() {
        out.push_str(&lines.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

/// Render the public exponent as a C scalar definition.
pub fn render_exponent(name: &str, value: u32) -> String {
    format!("const uint32_t {name} = 0x{value:X};\n")
}

/// Assemble the generated header: include guard, size macros, extern
/// declarations. Order is fixed: modulus, exponent, signature.
pub fn header_file(keys: &KeyMaterial) -> String {
    let macros = [
        format!("#define RSA_KEY_SIZE {}", keys.modulus.len()),
        format!("#define SIGNATURE_SIZE {}", keys.signature.len()),
    ];
    let decls = [
        format!("extern const uint8_t rsa_modulus[{}];", keys.modulus.len()),
        "extern const uint32_t rsa_exponent;".to_string(),
        format!(
            "extern const uint8_t firmware_signature[{}];",
            keys.signature.len()
        ),
    ];

    let mut out = format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n");
    out.push_str("#include <stdint.h>\n\n");
    for m in &macros {
        out.push_str(m);
        out.push('\n');
    }
    out.push('\n');
    for d in &decls {
        out.push_str(d);
        out.push('\n');
    }
    out.push_str(&format!("\n#endif // {INCLUDE_GUARD}\n"));
    out
}

/// Assemble the generated source: include of the generated header followed
/// by the array/scalar definitions, blank-line separated, in the same fixed
/// order as the header.
pub fn source_file(keys: &KeyMaterial) -> String {
    let defs = [
        render_c_array("rsa_modulus", &keys.modulus),
        render_exponent("rsa_exponent", keys.exponent),
        render_c_array("firmware_signature", &keys.signature),
    ];
    let mut out = String::from("#include \"rsa_keys.h\"\n\n");
    for d in &defs {
        out.push_str(d);
        out.push('\n');
    }
    out
}
