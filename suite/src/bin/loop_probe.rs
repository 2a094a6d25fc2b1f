use paltest_host::paltest_main;

paltest_main!(loop_probe, paltest_suite::loop_probe);
