use paltest_host::paltest_main;

paltest_main!(conversion_round_trip, paltest_suite::conversion_round_trip);
