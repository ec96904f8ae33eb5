use passmith::charset::{GenerationConfig, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
use passmith::passgen::{generate, PassgenError};

#[cfg(test)]
mod tests {
    use super::*;

    fn single_class(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: false,
        }
    }

    #[test]
    fn test_generate_default_config() {
        let config = GenerationConfig::default();
        let password = generate(&config).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_generate_exact_length_across_range() {
        for length in [1, 4, 16, 64] {
            let config = GenerationConfig {
                length,
                ..Default::default()
            };
            let password = generate(&config).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_output_stays_inside_enabled_alphabets() {
        let config = GenerationConfig {
            length: 64,
            include_uppercase: true,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
        };
        for _ in 0..20 {
            let password = generate(&config).unwrap();
            assert!(password
                .chars()
                .all(|c| UPPERCASE.contains(c) || NUMBERS.contains(c)));
            assert!(!password
                .chars()
                .any(|c| LOWERCASE.contains(c) || SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_symbols_only_config() {
        let config = GenerationConfig {
            length: 32,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: true,
        };
        let password = generate(&config).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_empty_charset_is_an_error() {
        for length in [4, 16, 64] {
            let config = GenerationConfig {
                length,
                include_uppercase: false,
                include_lowercase: false,
                include_numbers: false,
                include_symbols: false,
            };
            assert_eq!(generate(&config), Err(PassgenError::EmptyCharset));
        }
    }

    #[test]
    fn test_zero_length_yields_empty_password() {
        let config = GenerationConfig {
            length: 0,
            ..Default::default()
        };
        assert_eq!(generate(&config).unwrap(), "");
    }

    #[test]
    fn test_repeated_calls_vary() {
        let config = single_class(4);
        let first = generate(&config).unwrap();
        let varied = (0..100).any(|_| generate(&config).unwrap() != first);
        assert!(varied, "100 generations produced identical output");
    }

    #[test]
    fn test_single_class_draws_are_roughly_uniform() {
        // Chi-square goodness of fit over 10_000 lowercase draws. With 25
        // degrees of freedom the 0.001 critical value is 52.6; 70 keeps
        // the test stable while still catching a skewed sampler.
        let config = single_class(500);
        let mut counts = [0usize; 26];
        for _ in 0..20 {
            for c in generate(&config).unwrap().chars() {
                counts[(c as u8 - b'a') as usize] += 1;
            }
        }
        let total: usize = counts.iter().sum();
        assert_eq!(total, 10_000);

        let expected = total as f64 / 26.0;
        let chi2: f64 = counts
            .iter()
            .map(|&n| {
                let d = n as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 70.0, "chi-square statistic {} too large", chi2);
    }
}
