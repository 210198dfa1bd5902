/*!
# `CONT`

## Purpose
Continues a program after `STOP`, break or an error.

## Remarks
A stopped program continues at the line after the one that stopped.
After any other error it retries the line that failed, so you can fix
the cause in direct mode first. Variables are kept.
`CONT` does nothing if there is nothing to continue.

## Example
```text
10 PRINT "ONE"
20 STOP
30 PRINT "TWO"
RUN
ONE
9/30
CONT
TWO
0/30
```

*/
