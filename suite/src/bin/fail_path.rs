use paltest_host::paltest_main;

paltest_main!(fail_path, paltest_suite::fail_path);
