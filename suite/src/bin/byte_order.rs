use paltest_host::paltest_main;

paltest_main!(byte_order, paltest_suite::byte_order);
