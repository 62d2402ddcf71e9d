//! Domain type aliases declared at the top of the generated namespace.
//!
//! The documentation refers to these names (`vec3`, `path`, `mat4x4`, ...)
//! without ever defining them, so the generator provides a fixed
//! vocabulary. Matrices are modelled as objects keyed by 1-based
//! position, which is how Lua tables arrive in JavaScript.

/// Names of the aliases in [`BUILTIN_TYPES`].
pub const BUILTIN_ALIASES: &[&str] = &[
    "path",
    "table",
    "action",
    "custompropertytype",
    "integer",
    "vec2",
    "vec3",
    "vec4",
    "mat2x2",
    "mat3x3",
    "mat4x4",
    "translation",
    "spicekernel",
    "easingfunction",
];

/// The alias declarations, one per line, each terminated by a newline.
pub const BUILTIN_TYPES: &str = concat!(
    "type path = string;\n",
    "type table = object;\n",
    "type action = object;\n",
    "type custompropertytype = any;\n",
    "type integer = number;\n",
    "type vec2 = [number, number];\n",
    "type vec3 = [number, number, number];\n",
    "type vec4 = [number, number, number, number];\n",
    "type mat2x2 = { 1: number; 2: number; 3: number; 4: number; };\n",
    "type mat3x3 = { 1: number; 2: number; 3: number; 4: number; 5: number; ",
    "6: number; 7: number; 8: number; 9: number; };\n",
    "type mat4x4 = { 1: number; 2: number; 3: number; 4: number; 5: number; ",
    "6: number; 7: number; 8: number; 9: number; 10: number; 11: number; ",
    "12: number; 13: number; 14: number; 15: number; 16: number; };\n",
    "type translation = object;\n",
    "type spicekernel = path;\n",
    "type easingfunction = \"Linear\" | \"QuadraticEaseIn\" | \"QuadraticEaseOut\" | ",
    "\"QuadraticEaseInOut\" | \"CubicEaseIn\" | \"CubicEaseOut\" | \"CubicEaseInOut\" | ",
    "\"QuarticEaseIn\" | \"QuarticEaseOut\" | \"QuarticEaseInOut\" | \"QuinticEaseIn\" | ",
    "\"QuinticEaseOut\" | \"QuinticEaseInOut\" | \"SineEaseIn\" | \"SineEaseOut\" | ",
    "\"SineEaseInOut\" | \"CircularEaseIn\" | \"CircularEaseOut\" | \"CircularEaseInOut\" | ",
    "\"ExponentialEaseIn\" | \"ExponentialEaseOut\" | \"ExponentialEaseInOut\" | ",
    "\"ElasticEaseIn\" | \"ElasticEaseOut\" | \"ElasticEaseInOut\" | \"BounceEaseIn\" | ",
    "\"BounceEaseOut\" | \"BounceEaseInOut\";\n",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_is_declared() {
        for alias in BUILTIN_ALIASES {
            let declaration = format!("type {alias} = ");
            assert!(
                BUILTIN_TYPES.lines().any(|l| l.starts_with(&declaration)),
                "missing declaration for {alias}"
            );
        }
    }

    #[test]
    fn test_every_declaration_is_listed() {
        let declared = BUILTIN_TYPES.lines().count();
        assert_eq!(declared, BUILTIN_ALIASES.len());
    }

    #[test]
    fn test_matrix_keys_are_one_based() {
        let mat4 = BUILTIN_TYPES
            .lines()
            .find(|l| l.starts_with("type mat4x4"))
            .unwrap();
        assert!(mat4.contains(" 1: number;"));
        assert!(mat4.contains(" 16: number;"));
        assert!(!mat4.contains(" 0: number;"));
    }

    #[test]
    fn test_block_ends_with_newline() {
        assert!(BUILTIN_TYPES.ends_with(";\n"));
    }
}
