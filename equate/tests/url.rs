#[macro_use]
mod common;
use equate::parse;

#[test]
fn urls_compare_normalized() {
    equal![
        "new URL('https://EXAMPLE.com:443/p?x=1#h')" => "new URL('https://example.com/p?x=1#h')",
        "new URL('http://a.com:80')" => "new URL('http://a.com/')",
        "new URL('/p/../q', 'https://a.com/base/')" => "new URL('https://a.com/q')"
    ];
    unequal![
        "new URL('https://example.com/p?x=1&y=2')" => "new URL('https://example.com/p?y=2&x=1')",
        "new URL('https://a.com/p')" => "new URL('https://a.com/p/')",
        "new URL('https://a.com/#a')" => "new URL('https://a.com/#b')",
        "new URL('https://a.com:8443/')" => "new URL('https://a.com/')",
        "new URL('https://a.com/')" => "'https://a.com/'",
        "new URL('https://a.com/')" => "{}"
    ];
    equal!["{ deep: true }";
        "{ home: new URL('https://a.com') }" => "{ home: new URL('https://A.com/') }"
    ];
}

#[test]
fn search_params_compare_as_multisets() {
    equal![
        "new URLSearchParams('a=1&b=2&b=3')" => "new URLSearchParams('b=3&a=1&b=2')",
        "new URLSearchParams('?a=1')" => "new URLSearchParams('a=1')",
        "new URLSearchParams('')" => "new URLSearchParams()",
        "new URLSearchParams({ a: '1', b: '2' })" => "new URLSearchParams('b=2&a=1')",
        "new URLSearchParams([['a', '1']])" => "new URLSearchParams('a=1')"
    ];
    unequal![
        "new URLSearchParams('a=1&b=2&b=3')" => "new URLSearchParams('a=1&b=2')",
        "new URLSearchParams('a=1&a=1')" => "new URLSearchParams('a=1')",
        "new URLSearchParams('a=1')" => "new URLSearchParams('a=2')",
        "new URLSearchParams('a=1')" => "new URLSearchParams('A=1')"
    ];
}
