mod credential_accessor_test;
