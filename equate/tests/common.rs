#[allow(unused_macros)]
macro_rules! equal {
    ($options:literal; $($lhs:expr => $rhs:expr),+ $(,)?) => {{
        let options = parse!($options);
         $(
            let (lhs, rhs) = (parse!($lhs), parse!($rhs));
            assert_eq!(equate::equals_with(&lhs, &rhs, Some(&options)), Ok(true), "{} == {}", $lhs, $rhs);
            assert_eq!(equate::equals_with(&rhs, &lhs, Some(&options)), Ok(true), "{} == {}", $rhs, $lhs);
         )+
    }};
    ($($lhs:expr => $rhs:expr),+ $(,)?) => {{
         $(
            let (lhs, rhs) = (parse!($lhs), parse!($rhs));
            assert_eq!(equate::equals_with(&lhs, &rhs, None), Ok(true), "{} == {}", $lhs, $rhs);
            assert_eq!(equate::equals_with(&rhs, &lhs, None), Ok(true), "{} == {}", $rhs, $lhs);
         )+
    }};
}

#[allow(unused_macros)]
macro_rules! unequal {
    ($options:literal; $($lhs:expr => $rhs:expr),+ $(,)?) => {{
        let options = parse!($options);
         $(
            let (lhs, rhs) = (parse!($lhs), parse!($rhs));
            assert_eq!(equate::equals_with(&lhs, &rhs, Some(&options)), Ok(false), "{} != {}", $lhs, $rhs);
            assert_eq!(equate::equals_with(&rhs, &lhs, Some(&options)), Ok(false), "{} != {}", $rhs, $lhs);
         )+
    }};
    ($($lhs:expr => $rhs:expr),+ $(,)?) => {{
         $(
            let (lhs, rhs) = (parse!($lhs), parse!($rhs));
            assert_eq!(equate::equals_with(&lhs, &rhs, None), Ok(false), "{} != {}", $lhs, $rhs);
            assert_eq!(equate::equals_with(&rhs, &lhs, None), Ok(false), "{} != {}", $rhs, $lhs);
         )+
    }};
}

/// Compare a value with itself, as opposed to with an equal copy.
#[allow(unused_macros)]
macro_rules! reflexive {
    ($($value:expr),+ $(,)?) => {{
         $(
            let value = parse!($value);
            assert!(equate::equals(&value, &value, &equate::Options::default()), "{}", $value);
         )+
    }};
}
