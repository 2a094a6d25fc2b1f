use paltest_host::paltest_main;

paltest_main!(timestamp, paltest_suite::timestamp);
