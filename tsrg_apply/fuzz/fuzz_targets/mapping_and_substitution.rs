#![no_main]

use libfuzzer_sys::fuzz_target;
use tsrg_apply::mapping::Mappings;
use tsrg_apply::substitution::Substitutor;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if input.len() > 100_000 {
        return;
    }

    // Arbitrary text must never panic the loader.
    let _ = Mappings::parse(&input);

    // Every substitution pass must terminate, including identity and
    // self-embedding mappings.
    let mappings = Mappings::parse(
        "tsrg2 left right\nA A\n\tfield_1 field_1\n\tafield_2 field_2\n\tx_func_3 d func_3\n\tfield_4 d func_4\n",
    )
    .expect("fixed mapping is valid");
    let substitutor = Substitutor::new(&mappings);
    for line in input.lines() {
        let _ = substitutor.substitute_line(line);
    }
});
